//! Deterministic workloads shared by the Seep benchmarks.
//!
//! - [`shuffled_sites`]: every site of an `n`×`n` grid in seeded random order
//! - [`random_pairs`]: seeded element pairs for union-find streams

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::Site;

/// All `n * n` sites of a grid, shuffled with a ChaCha8 stream keyed by
/// `seed`.
pub fn shuffled_sites(n: usize, seed: u64) -> Vec<Site> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sites: Vec<Site> = Site::all(n).collect();
    sites.shuffle(&mut rng);
    sites
}

/// `count` uniformly random pairs over `0..elements`.
///
/// Returns an empty vector when `elements` is zero.
pub fn random_pairs(elements: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    if elements == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..elements), rng.gen_range(0..elements)))
        .collect()
}
