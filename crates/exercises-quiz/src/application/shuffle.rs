//! Uniform in-place shuffle.

use exercises_core::rng::DeterministicRng;

/// Fisher–Yates shuffle: every permutation is equally likely given a uniform
/// `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_usize_range(0, i);
        items.swap(i, j);
    }
}
