//! Seedable random sources.
//!
//! All randomness in the crate flows through an explicitly passed
//! generator. Runners build one from the configured seed with
//! [`create_rng`]; callers that need to share a source across several runs
//! pass their own to `run_with_rng`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generator used by the runners when no caller source is supplied.
pub type SearchRng = StdRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// The same seed always yields the same stream.
pub fn create_rng(seed: u64) -> SearchRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> SearchRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
