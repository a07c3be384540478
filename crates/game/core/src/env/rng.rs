//! Deterministic random number source.
//!
//! The core never owns a generator. Callers pass an [`RngOracle`] together
//! with a seed, so replays and tests reproduce the same picks.

pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index into a collection of `len` elements, `None` when empty.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        Some((self.next_u32(seed) % len) as usize)
    }
}

/// PCG-XSH-RR: one LCG step followed by an xorshift and a random rotation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        xorshifted.rotate_right((state >> 59) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
    }

    #[test]
    fn pick_index_stays_in_range() {
        let rng = PcgRng;
        assert_eq!(rng.pick_index(7, 0), None);
        for seed in 0..64 {
            let index = rng.pick_index(seed, 3).unwrap();
            assert!(index < 3);
        }
    }
}
