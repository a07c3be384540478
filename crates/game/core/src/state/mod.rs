//! Persisted actor state.
//!
//! These types are what the save system stores and restores. They carry no
//! references into the database; every lookup happens through the oracles
//! in [`crate::env`] when an [`crate::Actor`] wraps the state.
pub mod types;

pub use types::{
    ActorId, ActorState, BattleCommandOverrides, BattleRow, ClassId, CommandId, EquipSlot,
    Equipment, EquipmentBuilder, ItemId, LearnedSkills, SkillId, StateId, StatusConditions,
    TerrainId,
};
