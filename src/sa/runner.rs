//! SA execution loop.

use super::config::SaConfig;
use crate::cost::CostMatrix;
use crate::error::SolveResult;
use crate::operators::random_swap_neighbor;
use crate::random::rng_from_seed;
use crate::tour::{BestResult, Tour};
use rand::Rng;

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Number of accepted moves that increased the cost.
    pub worsening_moves: usize,

    /// Best cost at the start, after every 100th iteration, and after the
    /// last iteration when that is not already a sample point.
    pub cost_history: Vec<f64>,
}

impl From<SaResult> for BestResult {
    fn from(result: SaResult) -> Self {
        BestResult::new(result.best, result.best_cost)
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from [`SaConfig::seed`].
    pub fn run(model: &CostMatrix, config: &SaConfig) -> SolveResult<SaResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// Once the temperature underflows to zero, every non-improving move is
    /// rejected.
    #[tracing::instrument(
        level = "debug",
        name = "annealing",
        skip_all,
        fields(
            locations = model.size(),
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
            iterations = config.max_iterations,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        model: &CostMatrix,
        config: &SaConfig,
        rng: &mut R,
    ) -> SolveResult<SaResult> {
        config.validate()?;

        // Initialize
        let mut current = Tour::random(model.size(), rng);
        let mut current_cost = model.total_cost(current.as_slice())?;
        let mut best = BestResult::new(current.clone(), current_cost);

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut worsening_moves = 0usize;

        let mut cost_history = Vec::with_capacity(config.max_iterations / HISTORY_INTERVAL + 2);
        cost_history.push(best.cost);

        for iteration in 1..=config.max_iterations {
            let neighbor = random_swap_neighbor(&current, rng);
            let neighbor_cost = model.total_cost(neighbor.as_slice())?;
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                if delta > 0.0 {
                    worsening_moves += 1;
                }
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            if best.offer(&current, current_cost) {
                tracing::trace!(iteration, cost = current_cost, temperature, "new best tour");
            }

            // Cool down
            temperature *= config.cooling_rate;

            if iteration % HISTORY_INTERVAL == 0 {
                cost_history.push(best.cost);
            }
        }

        // Final history entry
        if config.max_iterations % HISTORY_INTERVAL != 0 {
            cost_history.push(best.cost);
        }

        tracing::debug!(
            best_cost = best.cost,
            accepted_moves,
            final_temperature = temperature,
            "annealing finished"
        );

        Ok(SaResult {
            best: best.tour,
            best_cost: best.cost,
            iterations: config.max_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            worsening_moves,
            cost_history,
        })
    }
}
