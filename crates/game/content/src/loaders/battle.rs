//! Battle data loader: formation policy, terrain grids and menu commands.

use std::path::Path;

use rpg_core::{BattleCommand, Placement, TerrainDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleCatalog {
    pub placement: Placement,
    pub terrains: Vec<TerrainDefinition>,
    pub commands: Vec<BattleCommand>,
}

/// Loader for battle data from RON files.
pub struct BattleLoader;

impl BattleLoader {
    pub fn load(path: &Path) -> LoadResult<BattleCatalog> {
        read_ron(path, "battle catalog")
    }
}
