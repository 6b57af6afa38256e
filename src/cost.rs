//! Cost model over a square matrix of non-negative edge costs.
//!
//! The matrix need not be symmetric. Diagonal entries are stored but never
//! read: a tour never moves from a location to itself.

use crate::error::{SolveError, SolveResult};
use crate::tour::check_permutation;

/// Immutable `n x n` cost matrix, `cost(i, j)` being the cost of travelling
/// from location `i` to location `j`.
///
/// # Examples
///
/// ```
/// use tour_metaheur::CostMatrix;
///
/// let m = CostMatrix::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 4.0],
///     vec![2.0, 4.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.total_cost(&[0, 1, 2]).unwrap(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n: usize,
    // Row-major, n * n.
    data: Vec<f64>,
}

impl CostMatrix {
    /// Validates and stores a row-major matrix.
    ///
    /// Fails with [`SolveError::InvalidMatrix`] when the matrix is empty,
    /// has fewer than two locations, is not square, or holds a negative or
    /// non-finite entry.
    pub fn new(rows: Vec<Vec<f64>>) -> SolveResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(SolveError::InvalidMatrix("matrix is empty".into()));
        }
        if n < 2 {
            return Err(SolveError::InvalidMatrix(
                "a tour needs at least two locations".into(),
            ));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &c) in row.iter().enumerate() {
                if !c.is_finite() {
                    return Err(SolveError::InvalidMatrix(format!(
                        "entry ({i}, {j}) is not finite"
                    )));
                }
                if c < 0.0 {
                    return Err(SolveError::InvalidMatrix(format!(
                        "entry ({i}, {j}) is negative: {c}"
                    )));
                }
            }
            data.extend(row);
        }

        Ok(Self { n, data })
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of the edge `from -> to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "location out of range");
        self.data[from * self.n + to]
    }

    /// Closed-cycle cost of `tour`, including the edge from the last
    /// location back to the first.
    ///
    /// Fails with [`SolveError::InvalidTour`] if `tour` is not a
    /// permutation of all locations.
    pub fn total_cost(&self, tour: &[usize]) -> SolveResult<f64> {
        check_permutation(tour, self.n)?;
        Ok(self.cycle_cost(tour))
    }

    // Caller guarantees `tour` is a permutation of 0..n.
    fn cycle_cost(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|k| self.data[tour[k] * self.n + tour[(k + 1) % n]])
            .sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<f64>>) -> SolveResult<Self> {
        Self::new(rows)
    }
}

/// Selection weight for a tour of the given cost: `1 / cost`, or `+inf`
/// for a zero-cost tour.
pub fn fitness(cost: f64) -> f64 {
    if cost > 0.0 {
        1.0 / cost
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_city() -> CostMatrix {
        CostMatrix::new(vec![
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 4.0, 5.0],
            vec![2.0, 4.0, 0.0, 6.0],
            vec![3.0, 5.0, 6.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_total_cost_includes_wrap_edge() {
        let m = four_city();
        assert_eq!(m.total_cost(&[0, 1, 2, 3]).unwrap(), 14.0);
        // 2->0 closes the cycle
        let m3 = CostMatrix::new(vec![
            vec![0.0, 1.0, 9.0],
            vec![7.0, 0.0, 2.0],
            vec![3.0, 8.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m3.total_cost(&[0, 1, 2]).unwrap(), 1.0 + 2.0 + 3.0);
        assert_eq!(m3.total_cost(&[0, 2, 1]).unwrap(), 9.0 + 8.0 + 7.0);
    }

    #[test]
    fn test_total_cost_rotation_invariant() {
        let m = four_city();
        let a = m.total_cost(&[0, 1, 2, 3]).unwrap();
        let b = m.total_cost(&[2, 3, 0, 1]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_total_cost_rejects_invalid_tours() {
        let m = four_city();
        let cases: [Vec<usize>; 4] = [vec![], vec![0, 1, 2], vec![0, 1, 1, 3], vec![0, 1, 2, 4]];
        for bad in cases {
            assert!(
                matches!(m.total_cost(&bad), Err(SolveError::InvalidTour(_))),
                "expected InvalidTour for {bad:?}"
            );
        }
    }

    #[test]
    fn test_rejects_bad_matrices() {
        let cases = vec![
            vec![],
            vec![vec![0.0]],
            vec![vec![0.0, 1.0], vec![1.0]],
            vec![vec![0.0, -1.0], vec![1.0, 0.0]],
            vec![vec![0.0, f64::NAN], vec![1.0, 0.0]],
            vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]],
        ];
        for rows in cases {
            assert!(matches!(
                CostMatrix::new(rows),
                Err(SolveError::InvalidMatrix(_))
            ));
        }
    }

    #[test]
    fn test_asymmetric_lookup() {
        let m = CostMatrix::new(vec![vec![0.0, 2.0], vec![5.0, 0.0]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.cost(0, 1), 2.0);
        assert_eq!(m.cost(1, 0), 5.0);
        assert_eq!(m.total_cost(&[1, 0]).unwrap(), 7.0);
    }

    #[test]
    fn test_fitness() {
        assert!((fitness(4.0) - 0.25).abs() < 1e-12);
        assert!(fitness(0.0).is_infinite());
        assert!(fitness(1.0) > fitness(2.0));
    }
}
