//! Tour representation and best-result tracking.
//!
//! A [`Tour`] is a permutation of `0..n` read as a closed cycle: the last
//! location connects back to the first. Every operator in the crate must
//! return a valid permutation; [`check_permutation`] is the single place
//! that invariant is verified.

use crate::error::{SolveError, SolveResult};
use rand::Rng;

/// An ordered visit of every location exactly once.
///
/// With the `serde` feature a tour (de)serializes as a plain sequence;
/// deserialization rejects sequences that are not a permutation of
/// `0..len`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Builds a tour over `n` locations, rejecting anything that is not a
    /// permutation of `0..n`.
    pub fn new(order: Vec<usize>, n: usize) -> SolveResult<Self> {
        check_permutation(&order, n)?;
        Ok(Self(order))
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        crate::random::shuffle(&mut order, rng);
        Self(order)
    }

    /// Wraps a sequence produced by an operator that preserves the
    /// permutation invariant.
    pub(crate) fn from_order(order: Vec<usize>) -> Self {
        Self(order)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = SolveError;

    /// Validates `order` as a permutation of `0..order.len()`.
    fn try_from(order: Vec<usize>) -> SolveResult<Self> {
        let n = order.len();
        Self::new(order, n)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

/// Verifies that `order` is a permutation of `0..n`.
pub fn check_permutation(order: &[usize], n: usize) -> SolveResult<()> {
    if order.len() != n {
        return Err(SolveError::InvalidTour(format!(
            "expected {n} locations, got {}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &loc) in order.iter().enumerate() {
        if loc >= n {
            return Err(SolveError::InvalidTour(format!(
                "location {loc} at position {pos} is out of range 0..{n}"
            )));
        }
        if seen[loc] {
            return Err(SolveError::InvalidTour(format!(
                "location {loc} appears more than once"
            )));
        }
        seen[loc] = true;
    }
    Ok(())
}

/// Best `(tour, cost)` pair observed during a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestResult {
    pub tour: Tour,
    pub cost: f64,
}

impl BestResult {
    pub fn new(tour: Tour, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// Replaces the held pair when `cost` is strictly lower.
    ///
    /// Ties keep the first-found tour. Returns whether a replacement
    /// happened.
    pub fn offer(&mut self, tour: &Tour, cost: f64) -> bool {
        if cost < self.cost {
            self.tour.clone_from(tour);
            self.cost = cost;
            true
        } else {
            false
        }
    }

    pub fn into_pair(self) -> (Tour, f64) {
        (self.tour, self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_accepts_permutation() {
        let tour = Tour::new(vec![2, 0, 1], 3).unwrap();
        assert_eq!(tour.as_slice(), &[2, 0, 1]);
        assert_eq!(tour.len(), 3);
    }

    #[test]
    fn test_new_rejects_duplicates_and_gaps() {
        assert!(matches!(
            Tour::new(vec![0, 0, 1], 3),
            Err(SolveError::InvalidTour(_))
        ));
        assert!(matches!(
            Tour::new(vec![0, 1, 3], 3),
            Err(SolveError::InvalidTour(_))
        ));
        assert!(matches!(
            Tour::new(vec![0, 1], 3),
            Err(SolveError::InvalidTour(_))
        ));
        assert!(matches!(
            Tour::new(vec![], 3),
            Err(SolveError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_try_from_vec() {
        assert_eq!(Tour::try_from(vec![1, 2, 0]).unwrap().as_slice(), &[1, 2, 0]);
        assert!(matches!(
            Tour::try_from(vec![0, 7, 9, 8]),
            Err(SolveError::InvalidTour(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_permutation() {
        let tour: Tour = serde_json::from_str("[2, 0, 1]").unwrap();
        assert_eq!(tour.as_slice(), &[2, 0, 1]);
        assert_eq!(serde_json::to_string(&tour).unwrap(), "[2,0,1]");

        assert!(serde_json::from_str::<Tour>("[0, 7, 9, 8]").is_err());
        assert!(serde_json::from_str::<Tour>("[0, 0, 1]").is_err());
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = create_rng(42);
        for n in 1..12 {
            let tour = Tour::random(n, &mut rng);
            assert!(check_permutation(tour.as_slice(), n).is_ok());
        }
    }

    #[test]
    fn test_best_result_keeps_first_on_tie() {
        let mut best = BestResult::new(Tour::identity(3), 10.0);
        let other = Tour::new(vec![2, 1, 0], 3).unwrap();

        assert!(!best.offer(&other, 10.0));
        assert_eq!(best.tour, Tour::identity(3));

        assert!(best.offer(&other, 9.5));
        assert_eq!(best.tour, other);
        assert!((best.cost - 9.5).abs() < 1e-12);
    }
}
