//! Uniform integer draws used to reseed textures

use crate::io::error::{Result, invalid_parameter};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Draw an integer uniformly from `[0, bound)`
    ///
    /// # Errors
    ///
    /// Returns an error if `bound` is zero or the source cannot produce a value
    fn next_int(&mut self, bound: u32) -> Result<u32>;
}

/// Seeded random source for reproducible reseeding
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a random source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, bound: u32) -> Result<u32> {
        if bound == 0 {
            return Err(invalid_parameter(
                "bound",
                &bound,
                &"range [0, 0) is empty",
            ));
        }
        Ok(self.rng.random_range(0..bound))
    }
}
