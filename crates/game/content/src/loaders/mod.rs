//! Content loaders for reading game data from files.
//!
//! Each loader converts one RON/TOML file into core types;
//! [`ContentFactory`] assembles them into a validated database.

pub mod actors;
pub mod battle;
pub mod config;
pub mod factory;
pub mod item;
pub mod skills;
pub mod terms;

pub use actors::{ActorCatalog, ActorLoader};
pub use battle::{BattleCatalog, BattleLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use skills::SkillLoader;
pub use terms::TermsLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a RON file; `what` names the content in error messages.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}

/// Reads and parses a TOML file; `what` names the content in error messages.
pub(crate) fn read_toml<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} TOML {}: {}", what, path.display(), e))
}
