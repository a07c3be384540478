//! Traits describing read-only game data.
//!
//! Oracles expose archetype and class growth tables, the item and skill
//! catalogs, terrain geometry, the battle command catalog, localized terms
//! and configuration. The [`GameEnv`] aggregate bundles them so an actor
//! can reach everything it needs without hard coupling to concrete
//! implementations.
mod archetypes;
mod battle;
mod config;
mod database;
mod error;
mod items;
mod rng;
mod skills;
mod terms;

pub use archetypes::{
    ArchetypeDefinition, ArchetypeOracle, ClassDefinition, ExpCurveParams, Learning,
    ParameterCurves,
};
pub use battle::{BattleCommand, BattleOracle, Placement, TerrainDefinition};
pub use config::ConfigOracle;
pub use database::Database;
pub use error::OracleError;
pub use items::{
    EquipBonuses, ItemCategory, ItemDefinition, ItemKind, ItemOracle, StatGains,
};
pub use rng::{PcgRng, RngOracle};
pub use skills::{SkillDefinition, SkillOracle};
pub use terms::{Terms, TermsOracle};

use crate::config::EngineVariant;

/// Aggregates the read-only oracles an actor consults.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    archetypes: &'a dyn ArchetypeOracle,
    items: &'a dyn ItemOracle,
    skills: &'a dyn SkillOracle,
    battle: &'a dyn BattleOracle,
    terms: &'a dyn TermsOracle,
    config: &'a dyn ConfigOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        archetypes: &'a dyn ArchetypeOracle,
        items: &'a dyn ItemOracle,
        skills: &'a dyn SkillOracle,
        battle: &'a dyn BattleOracle,
        terms: &'a dyn TermsOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self {
            archetypes,
            items,
            skills,
            battle,
            terms,
            config,
        }
    }

    pub fn archetypes(&self) -> &'a dyn ArchetypeOracle {
        self.archetypes
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    pub fn battle(&self) -> &'a dyn BattleOracle {
        self.battle
    }

    pub fn terms(&self) -> &'a Terms {
        self.terms.terms()
    }

    pub fn config(&self) -> &'a dyn ConfigOracle {
        self.config
    }

    /// Rule family the session runs under.
    pub fn variant(&self) -> EngineVariant {
        self.config.variant()
    }
}
