//! Configuration-driven solver dispatch.
//!
//! [`SolverConfig`] lets a caller pick one of the three solvers at runtime
//! and receive the shared [`BestResult`] regardless of which ran.

use crate::cost::CostMatrix;
use crate::error::SolveResult;
use crate::ga::{GaConfig, GaRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};
use crate::tour::BestResult;
use rand::Rng;

/// One of the available solvers together with its parameters.
///
/// # Examples
///
/// ```
/// use tour_metaheur::{CostMatrix, SolverConfig};
/// use tour_metaheur::tabu::TabuConfig;
///
/// let model = CostMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![1.0, 0.0, 6.0],
///     vec![15.0, 7.0, 0.0],
/// ]).unwrap();
/// let solver = SolverConfig::from(TabuConfig::default().with_seed(3));
/// let best = solver.solve(&model).unwrap();
/// assert_eq!(best.tour.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "solver", rename_all = "snake_case"))]
pub enum SolverConfig {
    Genetic(GaConfig),
    Tabu(TabuConfig),
    Annealing(SaConfig),
}

impl SolverConfig {
    /// Short name of the selected solver.
    pub fn name(&self) -> &'static str {
        match self {
            SolverConfig::Genetic(_) => "genetic",
            SolverConfig::Tabu(_) => "tabu",
            SolverConfig::Annealing(_) => "annealing",
        }
    }

    pub fn validate(&self) -> SolveResult<()> {
        match self {
            SolverConfig::Genetic(c) => c.validate(),
            SolverConfig::Tabu(c) => c.validate(),
            SolverConfig::Annealing(c) => c.validate(),
        }
    }

    /// Runs the selected solver, seeding from its configuration.
    pub fn solve(&self, model: &CostMatrix) -> SolveResult<BestResult> {
        Ok(match self {
            SolverConfig::Genetic(c) => GaRunner::run(model, c)?.into(),
            SolverConfig::Tabu(c) => TabuRunner::run(model, c)?.into(),
            SolverConfig::Annealing(c) => SaRunner::run(model, c)?.into(),
        })
    }

    /// Runs the selected solver drawing all randomness from `rng`.
    pub fn solve_with_rng<R: Rng>(&self, model: &CostMatrix, rng: &mut R) -> SolveResult<BestResult> {
        Ok(match self {
            SolverConfig::Genetic(c) => GaRunner::run_with_rng(model, c, rng)?.into(),
            SolverConfig::Tabu(c) => TabuRunner::run_with_rng(model, c, rng)?.into(),
            SolverConfig::Annealing(c) => SaRunner::run_with_rng(model, c, rng)?.into(),
        })
    }
}

impl From<GaConfig> for SolverConfig {
    fn from(config: GaConfig) -> Self {
        SolverConfig::Genetic(config)
    }
}

impl From<TabuConfig> for SolverConfig {
    fn from(config: TabuConfig) -> Self {
        SolverConfig::Tabu(config)
    }
}

impl From<SaConfig> for SolverConfig {
    fn from(config: SaConfig) -> Self {
        SolverConfig::Annealing(config)
    }
}
