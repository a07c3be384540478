//! Battle-related static data: terrain geometry and the command catalog.

use crate::state::{CommandId, TerrainId};

pub trait BattleOracle: Send + Sync {
    fn terrain(&self, id: TerrainId) -> Option<&TerrainDefinition>;

    fn command(&self, id: CommandId) -> Option<&BattleCommand>;

    /// Formation policy chosen in the battle settings.
    fn placement(&self) -> Placement;
}

/// Battle grid of a terrain.
///
/// The raw values are stored the way the editor saves them; the placement
/// calculator derives the actual band from them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainDefinition {
    pub id: TerrainId,
    pub name: String,
    /// Top edge of the formation band.
    pub grid_top: i32,
    /// Vertical extent, in 1/13 pixels.
    pub grid_elongation: i32,
    /// Horizontal extent, in 1/1103 pixels.
    pub grid_inclination: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleCommand {
    pub id: CommandId,
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Actors with fixed coordinates keep them.
    #[default]
    Manual,
    /// Every actor is laid out on the terrain grid.
    Automatic,
}
