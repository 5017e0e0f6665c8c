//! Injectable random source.
//!
//! Mission rewards are the only random draw in the simulation. Logic takes a
//! `&mut dyn RandomSource` so tests can pin the roll.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Seedable ChaCha-backed source used by real sessions.
pub struct SeededRng(ChaCha8Rng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (`crypto.getRandomValues` on wasm).
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RandomSource for SeededRng {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Always yields the same roll. Values are clamped into `[0, 1)`; NaN
/// becomes 0.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub f64);

impl RandomSource for FixedRoll {
    fn next_unit(&mut self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
