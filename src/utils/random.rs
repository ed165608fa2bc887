//! # Random Sources
//!
//! Generation never reaches for a global generator. It draws through
//! [`RandomSource`], which every `rand` generator implements, so a seeded
//! `StdRng` reproduces a room exactly and tests can script the draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two draws room generation needs.
pub trait RandomSource {
    /// Next float uniformly distributed in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next integer uniformly distributed in `[low, high]`, both inclusive.
    ///
    /// Callers guarantee `low <= high`.
    fn next_int(&mut self, low: i32, high: i32) -> i32;

    /// Rolls an event that happens with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low..=high)
    }
}

/// Creates a seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
