//! Seeded random streams.
//!
//! Every randomized operation in this crate takes its generator as an
//! explicit `&mut R where R: Rng`. This module only decides how a seed
//! becomes a stream, so that draw order is the sole source of variation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
///
/// Two generators created from the same seed produce identical streams.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles a slice in place using the supplied stream.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
