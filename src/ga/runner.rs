//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → repeat.

use super::config::GaConfig;
use super::types::Member;
use crate::cost::CostMatrix;
use crate::error::{SolveError, SolveResult};
use crate::operators::{order_crossover, swap_mutation};
use crate::random::rng_from_seed;
use crate::tour::{BestResult, Tour};
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best cost after each generation's evaluation, one entry per
    /// generation.
    pub cost_history: Vec<f64>,
}

impl From<GaResult> for BestResult {
    fn from(result: GaResult) -> Self {
        BestResult::new(result.best, result.best_cost)
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tour_metaheur::CostMatrix;
/// use tour_metaheur::ga::{GaConfig, GaRunner, Selection};
///
/// let model = CostMatrix::new(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 4.0, 5.0],
///     vec![2.0, 4.0, 0.0, 6.0],
///     vec![3.0, 5.0, 6.0, 0.0],
/// ]).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_selection(Selection::Rank)
///     .with_seed(42);
/// let result = GaRunner::run(&model, &config).unwrap();
/// assert_eq!(result.best_cost, 14.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from [`GaConfig::seed`].
    pub fn run(model: &CostMatrix, config: &GaConfig) -> SolveResult<GaResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(model, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// [`GaConfig::seed`] is ignored.
    #[tracing::instrument(
        level = "debug",
        name = "genetic",
        skip_all,
        fields(
            locations = model.size(),
            population = config.population_size,
            generations = config.max_generations,
            selection = ?config.selection,
        )
    )]
    pub fn run_with_rng<R: Rng>(
        model: &CostMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> SolveResult<GaResult> {
        config.validate()?;
        let n = model.size();

        // 1. Initialize population
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(n, rng))
            .collect();

        let mut best: Option<BestResult> = None;
        let mut cost_history = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for generation in 0..config.max_generations {
            // Evaluate
            let members = evaluate_population(model, population)?;
            let best_cost = track_best(&members, &mut best, generation)?;
            cost_history.push(best_cost);

            // Elite preservation: descending fitness, ties keep stored order
            let mut ranked: Vec<usize> = (0..members.len()).collect();
            ranked.sort_by(|&a, &b| members[b].fitness.total_cmp(&members[a].fitness));
            let mut next_gen: Vec<Tour> = ranked[..config.elite_count]
                .iter()
                .map(|&i| members[i].tour.clone())
                .collect();

            // Generate offspring
            let fitnesses: Vec<f64> = members.iter().map(|m| m.fitness).collect();
            while next_gen.len() < config.population_size {
                let (p1, p2) = config.selection.select_pair(&fitnesses, rng)?;

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    order_crossover(&members[p1].tour, &members[p2].tour, rng)?
                } else {
                    members[p1].tour.clone()
                };
                swap_mutation(&mut child, config.mutation_rate, rng);

                next_gen.push(child);
            }

            population = next_gen;
        }

        let best = best.ok_or(SolveError::EmptyPopulation)?;
        tracing::debug!(best_cost = best.cost, "genetic search finished");

        Ok(GaResult {
            best: best.tour,
            best_cost: best.cost,
            generations: config.max_generations,
            cost_history,
        })
    }
}

/// Score every tour in the population.
fn evaluate_population(model: &CostMatrix, population: Vec<Tour>) -> SolveResult<Vec<Member>> {
    population
        .into_iter()
        .map(|tour| Member::evaluate(tour, model))
        .collect()
}

/// Offer the lowest-cost member (first on ties) to `best` and return the
/// best cost so far.
fn track_best(members: &[Member], best: &mut Option<BestResult>, generation: usize) -> SolveResult<f64> {
    let leader = members
        .iter()
        .reduce(|a, b| if b.cost < a.cost { b } else { a })
        .ok_or(SolveError::EmptyPopulation)?;

    match best {
        Some(b) => {
            if b.offer(&leader.tour, leader.cost) {
                tracing::trace!(generation, cost = leader.cost, "new best tour");
            }
        }
        None => *best = Some(BestResult::new(leader.tour.clone(), leader.cost)),
    }
    Ok(best.as_ref().map_or(leader.cost, |b| b.cost))
}

// ============================================================================
// Tests
// ============================================================================
