//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random tour and record it in the tabu memory
//! 2. At each iteration:
//!    a. Generate the full swap neighborhood of the current tour
//!    b. Drop neighbors held in the tabu memory; stop if none remain
//!    c. Move to the cheapest survivor, even if it is worse
//!    d. Record the new tour in the memory (FIFO eviction)
//!    e. Update the global best if strictly improved
//! 3. Terminate after the iteration budget or on a stall
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

use rand::Rng;

use super::config::TabuConfig;
use super::types::TabuMemory;
use crate::cost::CostMatrix;
use crate::error::SolveResult;
use crate::operators::full_swap_neighborhood;
use crate::random::rng_from_seed;
use crate::tour::{BestResult, Tour};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Tour,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Number of moves applied.
    pub iterations: usize,
    /// Move after which the best tour was found (0 = initial tour).
    pub best_iteration: usize,
    /// Whether the search stopped because every neighbor was tabu.
    pub stalled: bool,
    /// Best cost before the first move and after each move.
    pub cost_history: Vec<f64>,
}

impl From<TabuResult> for BestResult {
    fn from(result: TabuResult) -> Self {
        BestResult::new(result.best, result.best_cost)
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search with a generator seeded from
    /// [`TabuConfig::seed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_metaheur::CostMatrix;
    /// use tour_metaheur::tabu::{TabuConfig, TabuRunner};
    ///
    /// let model = CostMatrix::new(vec![
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![1.0, 0.0, 4.0, 5.0],
    ///     vec![2.0, 4.0, 0.0, 6.0],
    ///     vec![3.0, 5.0, 6.0, 0.0],
    /// ]).unwrap();
    /// let config = TabuConfig::default()
    ///     .with_max_iterations(20)
    ///     .with_tabu_capacity(5)
    ///     .with_seed(1);
    /// let result = TabuRunner::run(&model, &config).unwrap();
    /// assert_eq!(result.best_cost, 14.0);
    /// ```
    pub fn run(model: &CostMatrix, config: &TabuConfig) -> SolveResult<TabuResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, config, &mut rng)
    }

    /// Executes Tabu Search drawing the initial tour from `rng`.
    ///
    /// [`TabuConfig::seed`] is ignored.
    #[tracing::instrument(
        level = "debug",
        name = "tabu",
        skip_all,
        fields(
            locations = model.size(),
            iterations = config.max_iterations,
            capacity = config.tabu_capacity,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        model: &CostMatrix,
        config: &TabuConfig,
        rng: &mut R,
    ) -> SolveResult<TabuResult> {
        config.validate()?;

        // Initialize
        let mut current = Tour::random(model.size(), rng);
        let initial_cost = model.total_cost(current.as_slice())?;
        let mut best = BestResult::new(current.clone(), initial_cost);
        let mut best_iteration = 0;

        let mut memory = TabuMemory::new(config.tabu_capacity)?;
        memory.insert(&current);

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best.cost);

        let mut iterations = 0;
        let mut stalled = false;

        while iterations < config.max_iterations {
            // Cheapest admissible neighbor, first in enumeration order on ties
            let mut chosen: Option<(Tour, f64)> = None;
            for neighbor in full_swap_neighborhood(&current) {
                if memory.contains(&neighbor) {
                    continue;
                }
                let cost = model.total_cost(neighbor.as_slice())?;
                if chosen.as_ref().map_or(true, |&(_, c)| cost < c) {
                    chosen = Some((neighbor, cost));
                }
            }

            let Some((next, next_cost)) = chosen else {
                tracing::debug!(iteration = iterations, "every neighbor is tabu, stopping");
                stalled = true;
                break;
            };

            current = next;
            memory.insert(&current);
            iterations += 1;

            if best.offer(&current, next_cost) {
                best_iteration = iterations;
                tracing::trace!(iteration = iterations, cost = next_cost, "new best tour");
            }
            cost_history.push(best.cost);
        }

        tracing::debug!(best_cost = best.cost, iterations, stalled, "tabu search finished");

        Ok(TabuResult {
            best: best.tour,
            best_cost: best.cost,
            iterations,
            best_iteration,
            stalled,
            cost_history,
        })
    }
}
