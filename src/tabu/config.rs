//! Tabu Search configuration.

use crate::error::{check_count, SolveResult};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tour_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(200)
///     .with_tabu_capacity(20);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.tabu_capacity, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Maximum number of moves.
    pub max_iterations: usize,
    /// How many recently visited tours are forbidden.
    pub tabu_capacity: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_capacity: 50,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SolveResult<()> {
        check_count("max_iterations", self.max_iterations)?;
        check_count("tabu_capacity", self.tabu_capacity)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    #[test]
    fn test_default_config() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_capacity, 50);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_counts() {
        assert!(matches!(
            TabuConfig::default().with_max_iterations(0).validate(),
            Err(SolveError::InvalidHyperparameter { name: "max_iterations", .. })
        ));
        assert!(matches!(
            TabuConfig::default().with_tabu_capacity(0).validate(),
            Err(SolveError::InvalidHyperparameter { name: "tabu_capacity", .. })
        ));
    }
}
