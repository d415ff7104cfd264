//! Seedable bounded random source.
//!
//! A string seed is hashed with SHA-256 into the 32-byte seed of a `StdRng`,
//! and the generator is reseeded on every call that supplies one. The same
//! seed therefore always yields the same first draw for the same range,
//! which is what makes seeded color sequences reproducible. Calls without a
//! seed reseed from the thread-local entropy source.
//!
//! Each `Generator` owns its own source, so independent seeded sequences
//! never interfere.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use tint_color::convert::round1;
use tint_color::{ColorError, Result};
use tracing::trace;

/// Bounded integer and alpha draws with optional string seeding.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// A source seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draw an integer in `[min, max]` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRange`] if `min > max`.
    pub fn between(&mut self, min: u32, max: u32, seed: Option<&str>) -> Result<u32> {
        if min > max {
            return Err(ColorError::InvalidRange {
                channel: "random",
                reason: format!("min {min} is greater than max {max}"),
            });
        }
        self.reseed(seed);
        Ok(self.rng.random_range(min..=max))
    }

    /// Draw an alpha in `[0, 1]` rounded to one decimal.
    pub fn alpha(&mut self, seed: Option<&str>) -> f64 {
        self.reseed(seed);
        round1(self.rng.random::<f64>())
    }

    fn reseed(&mut self, seed: Option<&str>) {
        match seed {
            Some(seed) => {
                trace!(seed, "reseeding random source");
                self.rng = StdRng::from_seed(digest(seed));
            }
            None => {
                self.rng = StdRng::from_rng(&mut rand::rng());
            }
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

fn digest(seed: &str) -> [u8; 32] {
    Sha256::digest(seed.as_bytes()).into()
}
