//! Deterministic actor logic for a classic 2D role-playing game runtime.
//!
//! `rpg-core` models a party-eligible character: stats layered from growth
//! tables, permanent modifiers and equipment; the experience curve and level
//! transitions; learned skills; equipment slots; and battle placement. It
//! reproduces the numeric behaviour of two legacy engine generations,
//! selected by [`EngineVariant`].
//!
//! Static game data is read through the oracle traits in [`env`]. Live
//! session collaborators (party stock, message window, battle globals and
//! the generic battler rules) are traits in [`session`], passed to the
//! operations that need them. All mutation goes through [`Actor`].
pub mod actor;
pub mod battle;
pub mod config;
pub mod env;
pub mod error;
pub mod growth;
pub mod session;
pub mod state;
pub mod stats;

#[cfg(test)]
mod testing;

pub use actor::{Actor, ActorError, NO_NEXT_EXP};
pub use battle::{CommandSlot, PlacementContext, resolve_commands};
pub use config::{EngineVariant, GameConfig};
pub use env::{
    ArchetypeDefinition, ArchetypeOracle, BattleCommand, BattleOracle, ClassDefinition,
    ConfigOracle, Database, EquipBonuses, ExpCurveParams, GameEnv, ItemCategory, ItemDefinition,
    ItemKind, ItemOracle, Learning, OracleError, ParameterCurves, PcgRng, Placement, RngOracle,
    SkillDefinition, SkillOracle, StatGains, TerrainDefinition, Terms, TermsOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use growth::ExpTable;
pub use session::{BattleMode, BattleState, BattlerRules, MessageLog, MessageQueue, Party};
pub use state::{
    ActorId, ActorState, BattleCommandOverrides, BattleRow, ClassId, CommandId, EquipSlot,
    Equipment, EquipmentBuilder, ItemId, LearnedSkills, SkillId, StateId, StatusConditions,
    TerrainId,
};
pub use stats::{StatBounds, StatKind, StatLayers, StatModifiers, StatResolver};
