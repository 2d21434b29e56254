//! Randomness helpers.
//!
//! The search consumes a single seeded generator owned by the engine;
//! operators take `&mut R` so tests can drive them with fixed seeds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded RNG for reproducible runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Bernoulli trial at `percent` percent.
///
/// Values of 100 or more always succeed; 0 never does.
pub fn percent_chance<R: Rng>(rng: &mut R, percent: u32) -> bool {
    rng.random_range(0..100) < percent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(a.random_range(0..1000), b.random_range(0..1000));
        }
    }

    #[test]
    fn percent_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert!(!percent_chance(&mut rng, 0));
            assert!(percent_chance(&mut rng, 100));
        }
    }

    #[test]
    fn percent_rate_is_roughly_honored() {
        let mut rng = create_rng(42);
        let hits = (0..10_000).filter(|_| percent_chance(&mut rng, 25)).count();
        assert!(
            (2000..3000).contains(&hits),
            "expected ~2500 hits at 25%, got {hits}"
        );
    }
}
