//! Experience curve formulas.
//!
//! Both formulas return the cumulative experience required to leave
//! `level`, i.e. the threshold of `level + 1`, before clamping. Save files
//! store absolute experience values, so the truncation order below is part
//! of the data format and must not be "simplified".

use crate::config::EngineVariant;
use crate::env::ExpCurveParams;

/// Compounding curve of the older engine.
///
/// The growth factor starts at `1.5 + inflation / 100` and decays towards 1
/// on every step. Each step truncates `correction + base` to an integer
/// before accumulating; `base` itself keeps its fractional part.
pub fn compounding(params: ExpCurveParams, level: i32) -> i64 {
    let correction = f64::from(params.correction);
    let decay = f64::from(level + 1) * 0.002 + 0.8;
    let mut base = f64::from(params.base);
    let mut inflation = 1.5 + f64::from(params.inflation) * 0.01;
    let mut total: i64 = 0;

    for _ in 1..=level {
        total = total.saturating_add((correction + base) as i64);
        base *= inflation;
        inflation = decay * (inflation - 1.0) + 1.0;
    }
    total
}

/// Linear curve of the newer engine: `base + n * inflation + correction` per level.
pub fn linear(params: ExpCurveParams, level: i32) -> i64 {
    let base = i64::from(params.base);
    let inflation = i64::from(params.inflation);
    let correction = i64::from(params.correction);

    (1..=i64::from(level.max(0))).fold(0i64, |total, n| {
        total
            .saturating_add(base)
            .saturating_add(n.saturating_mul(inflation))
            .saturating_add(correction)
    })
}

impl EngineVariant {
    /// Threshold of `level + 1` under this variant, clamped to the experience ceiling.
    pub fn exp_threshold(self, params: ExpCurveParams, level: i32) -> i32 {
        let raw = match self {
            Self::Rpg2k => compounding(params, level),
            Self::Rpg2k3 => linear(params, level),
        };
        raw.min(i64::from(self.max_exp())) as i32
    }
}
