//! Content factory for building the game database from data files.

use std::path::{Path, PathBuf};

use rpg_core::{Database, GameConfig, GameError, ItemDefinition, SkillDefinition, Terms};

use crate::loaders::{
    ActorCatalog, ActorLoader, BattleCatalog, BattleLoader, ConfigLoader, ItemLoader, LoadResult,
    SkillLoader, TermsLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── terms.toml      (optional)
/// ├── actors.ron
/// ├── items.ron
/// ├── skills.ron
/// └── battle.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load archetypes and classes from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorCatalog> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load terrains, battle commands and the formation policy from `battle.ron`.
    pub fn load_battle(&self) -> LoadResult<BattleCatalog> {
        BattleLoader::load(&self.data_dir.join("battle.ron"))
    }

    /// Load terms from `terms.toml`, or the built-in defaults if the file is absent.
    pub fn load_terms(&self) -> LoadResult<Terms> {
        let path = self.data_dir.join("terms.toml");
        if !path.exists() {
            return Ok(Terms::default());
        }
        TermsLoader::load(&path)
    }

    /// Load every table and assemble a validated [`Database`].
    ///
    /// Fails if a table is not stored in id order or an archetype refers to
    /// a class that does not exist.
    pub fn load_database(&self) -> LoadResult<Database> {
        let ActorCatalog { actors, classes } = self.load_actors()?;
        let BattleCatalog {
            placement,
            terrains,
            commands,
        } = self.load_battle()?;

        let database = Database {
            actors,
            classes,
            items: self.load_items()?,
            skills: self.load_skills()?,
            terrains,
            commands,
            placement,
            terms: self.load_terms()?,
        };

        database.validate().map_err(|e| {
            tracing::error!(
                severity = e.severity().as_str(),
                code = e.error_code(),
                "game database rejected"
            );
            anyhow::anyhow!("Invalid database in {}: {}", self.data_dir.display(), e)
        })?;

        tracing::info!(
            actors = database.actors.len(),
            items = database.items.len(),
            skills = database.skills.len(),
            "game database loaded"
        );
        Ok(database)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
