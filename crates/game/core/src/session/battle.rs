use crate::state::TerrainId;

/// How the encounter started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleMode {
    #[default]
    Normal,
    Initiative,
    BackAttack,
    Pincer,
    Surround,
}

impl BattleMode {
    /// Whether horizontal offsets are measured from the right screen edge.
    ///
    /// Only a back attack keeps the raw offset.
    pub const fn is_mirrored(self) -> bool {
        !matches!(self, Self::BackAttack)
    }
}

/// Global state of the battle currently running.
pub trait BattleState {
    fn terrain(&self) -> TerrainId;

    fn mode(&self) -> BattleMode;
}
