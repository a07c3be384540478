use super::StatKind;
use crate::config::EngineVariant;

/// Inclusive value range a resolved stat is clamped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBounds {
    pub min: i32,
    pub max: i32,
}

impl StatBounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Bounds for `stat` under the given rule family.
    ///
    /// SP may drop to zero; every other stat keeps at least one point.
    pub const fn for_stat(stat: StatKind, variant: EngineVariant) -> Self {
        match stat {
            StatKind::MaxHp => Self::new(1, variant.max_hp()),
            StatKind::MaxSp => Self::new(0, variant.max_other_stat()),
            StatKind::Attack | StatKind::Defense | StatKind::Spirit | StatKind::Agility => {
                Self::new(1, variant.max_other_stat())
            }
        }
    }

    /// Experience accumulated by an actor.
    pub const fn experience(variant: EngineVariant) -> Self {
        Self::new(0, variant.max_exp())
    }

    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}
