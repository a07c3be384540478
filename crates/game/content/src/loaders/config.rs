//! Game configuration loader.

use std::path::Path;

use rpg_core::GameConfig;

use crate::loaders::{LoadResult, read_toml};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    ///
    /// # Returns
    ///
    /// Returns a GameConfig. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let config: GameConfig = read_toml(path, "config")?;
        tracing::debug!(variant = %config.variant, "loaded game config");
        Ok(config)
    }
}
