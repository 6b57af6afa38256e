//! Population member type.

use crate::cost::{fitness, CostMatrix};
use crate::error::SolveResult;
use crate::tour::Tour;

/// A scored tour in the GA population.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub tour: Tour,
    /// Closed-cycle cost of `tour`.
    pub cost: f64,
    /// `1 / cost`, or `+inf` for a zero-cost tour.
    pub fitness: f64,
}

impl Member {
    /// Scores `tour` against `model`.
    pub fn evaluate(tour: Tour, model: &CostMatrix) -> SolveResult<Self> {
        let cost = model.total_cost(tour.as_slice())?;
        Ok(Self {
            tour,
            cost,
            fitness: fitness(cost),
        })
    }
}
