//! Metaheuristic solvers for permutation tours.
//!
//! Given an `n x n` cost matrix, find a closed tour through every location
//! with low total cost. Three independent solvers share one tour encoding,
//! one cost model, and one set of neighborhood operators:
//!
//! - **Genetic Algorithm (GA)**: Population-based evolution with elitism,
//!   ordered crossover, swap mutation, and roulette or rank selection.
//! - **Tabu Search (TS)**: Full swap-neighborhood descent with a FIFO
//!   memory of recently visited tours.
//! - **Simulated Annealing (SA)**: Random swap moves under the Metropolis
//!   rule with geometric cooling.
//!
//! All solvers are heuristic and may return a local optimum. Every run
//! draws its randomness from an explicit, seedable generator, so a fixed
//! seed reproduces the same `(tour, cost)` pair.
//!
//! # Example
//!
//! ```
//! use tour_metaheur::{CostMatrix, SolverConfig};
//! use tour_metaheur::sa::SaConfig;
//!
//! let model = CostMatrix::new(vec![
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![1.0, 0.0, 4.0, 5.0],
//!     vec![2.0, 4.0, 0.0, 6.0],
//!     vec![3.0, 5.0, 6.0, 0.0],
//! ])?;
//! let solver = SolverConfig::from(SaConfig::default().with_max_iterations(1_000).with_seed(42));
//! let best = solver.solve(&model)?;
//! assert_eq!(best.cost, 14.0);
//! # Ok::<(), tour_metaheur::SolveError>(())
//! ```

pub mod cost;
pub mod error;
pub mod ga;
pub mod operators;
pub mod random;
pub mod sa;
pub mod solver;
pub mod tabu;
pub mod tour;

#[cfg(test)]
mod testing;

pub use cost::{fitness, CostMatrix};
pub use error::{SolveError, SolveResult};
pub use solver::SolverConfig;
pub use tour::{BestResult, Tour};
