//! Data-driven game content and loaders.
//!
//! This crate reads the static game database and configuration from RON/TOML
//! data files:
//! - Actor archetypes and classes (RON)
//! - Item catalog (RON)
//! - Skill catalog (RON)
//! - Battle terrains and the battle command catalog (RON)
//! - Localized terms (TOML)
//! - Game configuration (TOML)
//!
//! The assembled [`rpg_core::Database`] implements every oracle the actor
//! core reads; content never appears in persisted actor state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorCatalog, ActorLoader, BattleCatalog, BattleLoader, ConfigLoader, ContentFactory,
    ItemLoader, LoadResult, SkillLoader, TermsLoader,
};
