//! Genetic Algorithm solver.
//!
//! A population of tours evolves under elitism, ordered crossover, and
//! swap mutation. The two classic variants, roulette-wheel and rank-based
//! parent selection, share one runner and differ only in [`Selection`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elites)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour, its cost, and the best-cost history
//! - [`Selection`]: Parent selection policy
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::Member;
