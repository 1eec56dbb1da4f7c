//! Random number generator abstraction.
//!
//! In production this wraps a time-seeded `StdRng`. Tests inject a fixed
//! sequence instead so that shuffles are repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::Clock;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Generate a random `usize` in the range `[min, max]` inclusive.
    fn next_usize_range(&mut self, min: usize, max: usize) -> usize;
}

/// Production RNG backed by `StdRng`.
#[derive(Debug)]
pub struct SeededRng {
    inner: StdRng,
}

impl SeededRng {
    /// Create an RNG from an explicit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the clock's current time in nanoseconds.
    ///
    /// Two runs started at different instants shuffle differently.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        let nanos = clock.now().timestamp_nanos_opt().unwrap_or_default();
        Self::from_seed(u64::from_ne_bytes(nanos.to_ne_bytes()))
    }
}

impl DeterministicRng for SeededRng {
    fn next_usize_range(&mut self, min: usize, max: usize) -> usize {
        self.inner.random_range(min..=max)
    }
}
