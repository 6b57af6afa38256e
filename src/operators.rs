//! Neighborhood and genetic operators on tours.
//!
//! Every operator returns a valid permutation when given valid
//! permutations; swaps preserve the invariant trivially and order
//! crossover rebuilds it from the two parents.
//!
//! # Local search
//!
//! - [`full_swap_neighborhood`]: all `n(n-1)/2` pairwise swaps, in
//!   ascending `(i, j)` order
//! - [`random_swap_neighbor`]: one swap of two distinct random positions
//!
//! # Genetic
//!
//! - [`order_crossover`] (OX1): Davis (1985), preserves a slice of the first
//!   parent and the relative order of the second
//! - [`swap_mutation`]: per-position swap with a random partner
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::error::{SolveError, SolveResult};
use crate::tour::{check_permutation, Tour};
use rand::Rng;

// ============================================================================
// Swap neighborhoods
// ============================================================================

/// Every tour reachable from `tour` by swapping the locations at two
/// positions.
///
/// Enumerates pairs `(i, j)` with `i < j`, ascending in `i` and then `j`,
/// so that "first minimum" tie-breaks are reproducible.
///
/// # Complexity
/// O(n^3) time and space: `n(n-1)/2` copies of length `n`.
pub fn full_swap_neighborhood(tour: &Tour) -> Vec<Tour> {
    let n = tour.len();
    let mut neighbors = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let mut neighbor = tour.clone();
            neighbor.swap(i, j);
            neighbors.push(neighbor);
        }
    }
    neighbors
}

/// Swaps two distinct, uniformly chosen positions of a copy of `tour`.
///
/// Tours shorter than two positions are returned unchanged.
pub fn random_swap_neighbor<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let mut neighbor = tour.clone();
    if let Some((i, j)) = distinct_positions(tour.len(), rng) {
        neighbor.swap(i, j);
    }
    neighbor
}

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover (OX1).
///
/// Draws a segment `[start, end]` with `start < end`, copies it from
/// `parent1` into the same positions of the child, then fills the remaining
/// positions left to right with the locations of `parent2` in their original
/// order, skipping those already in the segment.
///
/// Fails with [`SolveError::InvalidTour`] if the parents differ in length
/// or either is not a permutation of `0..n`.
pub fn order_crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> SolveResult<Tour> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(SolveError::InvalidTour(format!(
            "parents differ in length: {n} vs {}",
            parent2.len()
        )));
    }
    check_permutation(parent1.as_slice(), n)?;
    check_permutation(parent2.as_slice(), n)?;
    match distinct_positions(n, rng) {
        Some((a, b)) => Ok(ox_build_child(
            parent1.as_slice(),
            parent2.as_slice(),
            a.min(b),
            a.max(b),
        )),
        None => Ok(parent1.clone()),
    }
}

/// OX1 with a caller-chosen segment `[start, end]` (inclusive).
///
/// Both parents must be permutations of `0..n` and the segment must satisfy
/// `start <= end < n`; otherwise [`SolveError::InvalidTour`] is returned.
pub fn order_crossover_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> SolveResult<Tour> {
    let n = parent1.len();
    check_permutation(parent1, n)?;
    check_permutation(parent2, n)?;
    if start > end || end >= n {
        return Err(SolveError::InvalidTour(format!(
            "segment [{start}, {end}] out of range for {n} locations"
        )));
    }
    Ok(ox_build_child(parent1, parent2, start, end))
}

/// Build one OX1 child: segment from `template`, remainder from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Tour {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let remainder = donor.iter().copied().filter(|&v| !in_segment[v]);
    for (pos, val) in (0..start).chain(end + 1..n).zip(remainder) {
        child[pos] = val;
    }

    Tour::from_order(child)
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: each position, with probability `rate`, exchanges its
/// location with that of a uniformly random position (possibly itself).
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) {
    let n = tour.len();
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            tour.swap(i, j);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct uniformly random positions in `0..n`, or `None` if `n < 2`.
fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    Some((i, j))
}

// ============================================================================
// Tests
// ============================================================================
