//! Parent selection policies for the GA.
//!
//! Both policies pick two parents per call, with replacement, using only
//! each member's fitness (higher is better, see [`crate::cost::fitness`]).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use crate::error::{SolveError, SolveResult};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use tour_metaheur::ga::Selection;
/// use tour_metaheur::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let fitnesses = [0.1, 0.5, 0.2];
/// let (a, b) = Selection::Rank.select_pair(&fitnesses, &mut rng).unwrap();
/// assert!(a < 3 && b < 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Draws `u ~ U(0, sum of fitness)` and walks the population in stored
    /// order until the running sum reaches `u`.
    ///
    /// **Warning**: a single very fit member can dominate the wheel.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Rank-based selection.
    ///
    /// Members are sorted by ascending fitness and weighted by rank,
    /// 1 (worst) through n (best), so selection pressure does not depend
    /// on the spread of raw fitness values. Tied fitness values share the
    /// average of their ranks.
    ///
    /// # Complexity
    /// O(n log n) per selection (sort)
    Rank,
}

impl Selection {
    /// Selects one parent index.
    ///
    /// Fails with [`SolveError::EmptyPopulation`] if `fitnesses` is empty.
    pub fn select<R: Rng>(&self, fitnesses: &[f64], rng: &mut R) -> SolveResult<usize> {
        if fitnesses.is_empty() {
            return Err(SolveError::EmptyPopulation);
        }
        Ok(match self {
            Selection::Roulette => roulette(fitnesses, rng),
            Selection::Rank => {
                let wheel = RankWheel::new(fitnesses);
                wheel.spin(rng)
            }
        })
    }

    /// Selects two parent indices independently (a member may be picked
    /// twice).
    pub fn select_pair<R: Rng>(
        &self,
        fitnesses: &[f64],
        rng: &mut R,
    ) -> SolveResult<(usize, usize)> {
        if fitnesses.is_empty() {
            return Err(SolveError::EmptyPopulation);
        }
        Ok(match self {
            Selection::Roulette => (roulette(fitnesses, rng), roulette(fitnesses, rng)),
            Selection::Rank => {
                let wheel = RankWheel::new(fitnesses);
                (wheel.spin(rng), wheel.spin(rng))
            }
        })
    }
}

/// Roulette wheel over raw fitness.
///
/// A zero total falls back to a uniform pick. An infinite total (some
/// member has zero cost) picks uniformly among the infinite members.
fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    let n = fitnesses.len();
    let total: f64 = fitnesses.iter().sum();

    if total.is_infinite() {
        let unbounded: Vec<usize> = (0..n).filter(|&i| fitnesses[i].is_infinite()).collect();
        return unbounded[rng.random_range(0..unbounded.len())];
    }
    if total <= 0.0 || total.is_nan() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..=total);
    let mut cumulative = 0.0;
    for (i, &f) in fitnesses.iter().enumerate() {
        cumulative += f;
        if cumulative >= threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Rank weights for one population, built once and spun many times.
struct RankWheel {
    // Member indices by ascending fitness, paired with their rank weight.
    slots: Vec<(usize, f64)>,
    total: f64,
}

impl RankWheel {
    fn new(fitnesses: &[f64]) -> Self {
        let n = fitnesses.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| fitnesses[a].total_cmp(&fitnesses[b]));

        let mut slots = Vec::with_capacity(n);
        let mut k = 0;
        while k < n {
            // Group equal fitness values at sorted positions k..m.
            let mut m = k + 1;
            while m < n && fitnesses[order[m]] == fitnesses[order[k]] {
                m += 1;
            }
            // Average of ranks k+1 ..= m.
            let rank = (k + 1 + m) as f64 / 2.0;
            slots.extend(order[k..m].iter().map(|&i| (i, rank)));
            k = m;
        }

        Self {
            slots,
            total: (n * (n + 1)) as f64 / 2.0,
        }
    }

    fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let threshold = rng.random_range(0.0..=self.total);
        let mut cumulative = 0.0;
        for &(idx, rank) in &self.slots {
            cumulative += rank;
            if cumulative >= threshold {
                return idx;
            }
        }
        self.slots[self.slots.len() - 1].0 // floating-point fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn counts(selection: Selection, fitnesses: &[f64], draws: usize) -> Vec<u32> {
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; fitnesses.len()];
        for _ in 0..draws {
            let (a, b) = selection.select_pair(fitnesses, &mut rng).unwrap();
            counts[a] += 1;
            counts[b] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_favors_fittest() {
        let c = counts(Selection::Roulette, &[0.01, 0.02, 1.0, 0.0125], 5000);
        assert!(
            c[2] > 8000,
            "expected fittest to dominate roulette, got {c:?}"
        );
    }

    #[test]
    fn test_rank_favors_fittest_but_flatter() {
        let fitnesses = [0.01, 0.02, 1.0, 0.0125];
        let rank = counts(Selection::Rank, &fitnesses, 5000);
        let roulette = counts(Selection::Roulette, &fitnesses, 5000);

        // Best has rank 4 of total 10: about 40% of picks.
        assert!(rank[2] > rank[1] && rank[1] > rank[3] && rank[3] > rank[0]);
        assert!(
            rank[2] < roulette[2],
            "rank should flatten the outlier: rank={rank:?}, roulette={roulette:?}"
        );
    }

    #[test]
    fn test_uniform_fitness_is_uniform() {
        for selection in [Selection::Roulette, Selection::Rank] {
            let c = counts(selection, &[0.25; 4], 5000);
            for &x in &c {
                assert!(
                    (2000..3000).contains(&x),
                    "{selection:?} should be uniform on equal fitness, got {c:?}"
                );
            }
        }
    }

    #[test]
    fn test_single_member() {
        let mut rng = create_rng(42);
        assert_eq!(Selection::Roulette.select(&[0.5], &mut rng), Ok(0));
        assert_eq!(Selection::Rank.select(&[0.5], &mut rng), Ok(0));
        assert_eq!(Selection::Rank.select_pair(&[0.5], &mut rng), Ok((0, 0)));
    }

    #[test]
    fn test_empty_population() {
        let mut rng = create_rng(42);
        for selection in [Selection::Roulette, Selection::Rank] {
            assert_eq!(
                selection.select(&[], &mut rng),
                Err(SolveError::EmptyPopulation)
            );
            assert_eq!(
                selection.select_pair(&[], &mut rng),
                Err(SolveError::EmptyPopulation)
            );
        }
    }

    #[test]
    fn test_roulette_zero_total_falls_back_to_uniform() {
        let c = counts(Selection::Roulette, &[0.0; 4], 5000);
        for &x in &c {
            assert!((2000..3000).contains(&x), "got {c:?}");
        }
    }

    #[test]
    fn test_roulette_infinite_fitness_wins() {
        let c = counts(Selection::Roulette, &[0.5, f64::INFINITY, 0.2, f64::INFINITY], 2000);
        assert_eq!(c[0] + c[2], 0);
        assert!(c[1] > 1000 && c[3] > 1000, "got {c:?}");
    }

    #[test]
    fn test_rank_ties_share_weight() {
        let wheel = RankWheel::new(&[0.3, 0.1, 0.3, 0.2]);
        let weight = |idx: usize| {
            wheel
                .slots
                .iter()
                .find(|&&(i, _)| i == idx)
                .map(|&(_, w)| w)
                .unwrap()
        };
        assert_eq!(weight(1), 1.0);
        assert_eq!(weight(3), 2.0);
        assert_eq!(weight(0), 3.5);
        assert_eq!(weight(2), 3.5);
        assert_eq!(wheel.total, 10.0);
    }
}
