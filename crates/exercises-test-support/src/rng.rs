//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use exercises_core::rng::DeterministicRng;

/// A no-op RNG that always returns `max`. A Fisher–Yates shuffle driven by
/// it leaves the input order untouched.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_usize_range(&mut self, _min: usize, max: usize) -> usize {
        max
    }
}

/// An RNG that returns values from a predetermined sequence, clamped into the
/// requested range. Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<usize>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_usize_range(&mut self, min: usize, max: usize) -> usize {
        let val = self.values[self.index];
        self.index += 1;
        val.clamp(min, max)
    }
}
