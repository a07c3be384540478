use crate::config::EngineVariant;
use crate::env::ExpCurveParams;

/// Minimum cumulative experience per level.
///
/// Index 0 is level 1 and always 0; index `final_level - 1` is the
/// threshold of the final level. The table is derived data and is rebuilt
/// whenever the actor's effective curve changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpTable {
    thresholds: Vec<i32>,
}

impl ExpTable {
    /// Builds the table for levels `1..=final_level`.
    ///
    /// A final level below 1 yields a single-level table.
    pub fn build(variant: EngineVariant, params: ExpCurveParams, final_level: i32) -> Self {
        let final_level = final_level.max(1);
        let thresholds = (0..final_level)
            .map(|level| match level {
                0 => 0,
                level => variant.exp_threshold(params, level),
            })
            .collect();

        tracing::trace!(?variant, ?params, final_level, "built experience table");
        Self { thresholds }
    }

    #[inline]
    pub fn max_level(&self) -> i32 {
        self.thresholds.len() as i32
    }

    /// Threshold of `level`, `None` outside `1..=max_level`.
    pub fn min_exp(&self, level: i32) -> Option<i32> {
        usize::try_from(level - 1)
            .ok()
            .and_then(|index| self.thresholds.get(index))
            .copied()
    }

    /// Experience needed to leave `level`.
    ///
    /// `None` at or beyond the final level, and for levels below 1.
    pub fn next_exp(&self, level: i32) -> Option<i32> {
        if level <= 0 || level >= self.max_level() {
            return None;
        }
        self.min_exp(level + 1)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_level_needs_no_experience() {
        let table = ExpTable::build(EngineVariant::Rpg2k, ExpCurveParams::new(40, 30, 0), 10);
        assert_eq!(table.max_level(), 10);
        assert_eq!(table.min_exp(1), Some(0));
        assert_eq!(table.min_exp(2), Some(40));
        assert_eq!(table.min_exp(5), Some(410));
    }

    #[test]
    fn thresholds_never_decrease() {
        for variant in [EngineVariant::Rpg2k, EngineVariant::Rpg2k3] {
            let table = ExpTable::build(variant, ExpCurveParams::new(35, 45, 10), 99);
            assert!(table.as_slice().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn next_exp_is_absent_at_final_level() {
        let table = ExpTable::build(EngineVariant::Rpg2k3, ExpCurveParams::new(10, 5, 2), 5);
        assert_eq!(table.next_exp(4), table.min_exp(5));
        assert_eq!(table.next_exp(5), None);
        assert_eq!(table.next_exp(0), None);
        assert_eq!(table.min_exp(6), None);
    }

    #[test]
    fn degenerate_final_level_keeps_one_level() {
        let table = ExpTable::build(EngineVariant::Rpg2k, ExpCurveParams::default(), 0);
        assert_eq!(table.max_level(), 1);
        assert_eq!(table.next_exp(1), None);
    }
}
