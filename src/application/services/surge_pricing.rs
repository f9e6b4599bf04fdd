//! Random surge multiplier sampling.
//!
//! Each sample is independent and uniformly distributed over `[1.0, 1.3)`.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::SurgeMultiplier;

/// Lower bound of a sampled multiplier (inclusive).
pub const SURGE_MIN: f64 = 1.0;
/// Upper bound of a sampled multiplier (exclusive).
pub const SURGE_MAX: f64 = 1.3;

/// Samples surge multipliers uniformly from `[SURGE_MIN, SURGE_MAX)`.
#[derive(Debug)]
pub struct SurgePricing {
    rng: StdRng,
}

impl SurgePricing {
    /// Creates a sampler seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible sampler.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a sampler, seeded when `seed` is set.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Draws the next multiplier.
    pub fn sample(&mut self) -> SurgeMultiplier {
        let value = self.rng.gen_range(SURGE_MIN..SURGE_MAX);
        SurgeMultiplier::new(value).unwrap_or(SurgeMultiplier::NONE)
    }
}

impl Default for SurgePricing {
    fn default() -> Self {
        Self::new()
    }
}
