//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic over the full swap
//! neighborhood. A short-term memory of recently visited tours forbids
//! revisits, so the walk keeps moving past local optima instead of
//! cycling between them.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
pub use types::TabuMemory;
