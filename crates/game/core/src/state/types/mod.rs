pub mod actor;
pub mod commands;
pub mod common;
pub mod equipment;
pub mod skills;
pub mod status;

pub use actor::ActorState;
pub use commands::BattleCommandOverrides;
pub use common::{
    ActorId, BattleRow, ClassId, CommandId, ItemId, SkillId, StateId, TerrainId,
};
pub use equipment::{EquipSlot, Equipment, EquipmentBuilder};
pub use skills::LearnedSkills;
pub use status::StatusConditions;
