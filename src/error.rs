//! Error types.
//!
//! Every failure is an input or programming error surfaced synchronously
//! to the caller. Nothing is retried internally.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors raised by cost evaluation, operators, and solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The cost matrix is empty, not square, too small, or holds a
    /// negative or non-finite entry.
    #[error("invalid cost matrix: {0}")]
    InvalidMatrix(String),

    /// A tour is not a permutation of `0..n`.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A solver parameter is out of range.
    #[error("invalid hyperparameter `{name}`: {reason}")]
    InvalidHyperparameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with its value.
        reason: String,
    },

    /// Parent selection was invoked on a population with no members.
    #[error("cannot select parents from an empty population")]
    EmptyPopulation,
}

impl SolveError {
    pub(crate) fn hyperparameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidHyperparameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Checks that `value` is a probability in `[0, 1]`.
pub(crate) fn check_rate(name: &'static str, value: f64) -> SolveResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SolveError::hyperparameter(
            name,
            format!("must be in [0, 1], got {value}"),
        ))
    }
}

/// Checks that a count is at least one.
pub(crate) fn check_count(name: &'static str, value: usize) -> SolveResult<()> {
    if value == 0 {
        Err(SolveError::hyperparameter(name, "must be at least 1"))
    } else {
        Ok(())
    }
}
