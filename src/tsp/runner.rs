//! Hill climbing and random restarts.
//!
//! # Algorithm
//!
//! Best-improvement climb:
//! 1. Scan every 2-opt move of the current tour and keep the most negative delta
//! 2. If it is below `-epsilon`, apply it, add the delta to the running cost
//!    and repeat; otherwise stop at a local optimum
//!
//! Random restart:
//! 1. For each restart draw a fresh shuffled tour from the shared stream
//! 2. Climb to convergence and record the restart
//! 3. Keep the best tour seen so far (strict improvement only)

use std::time::Instant;

use rand::Rng;
use tracing::{debug, trace};

use super::config::{LocalSearchOperator, RestartConfig};
use super::two_opt::{apply_two_opt_in_place, iter_two_opt_moves, two_opt_delta};
use super::types::{random_tour, tour_cost, City, Tour};
use crate::error::{Result, SearchError};

/// Local optimum reached by one climb.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbResult {
    pub tour: Tour,
    /// Cost maintained incrementally from the accepted deltas.
    pub cost: f64,
    /// Number of accepted moves.
    pub iterations: usize,
}

/// One restart of [`HillClimbRunner::run`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartRecord {
    pub algorithm: String,
    pub n_cities: usize,
    pub seed: u64,
    /// Total restarts in the run this record belongs to.
    pub restarts: usize,
    pub operator: LocalSearchOperator,
    /// 1-based.
    pub restart_index: usize,
    pub initial_tour: Tour,
    pub initial_cost: f64,
    pub best_tour: Tour,
    pub best_cost: f64,
    pub iterations: usize,
    pub runtime_ms: f64,
}

/// Result of a random-restart run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartOutcome {
    /// Best tour over all restarts.
    pub best_tour: Tour,
    pub best_cost: f64,
    /// One record per restart, in restart order.
    pub records: Vec<RestartRecord>,
}

/// Executes 2-opt hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Best-improvement 2-opt from `initial` until no move improves by more
    /// than `epsilon`.
    pub fn climb(initial: &[usize], cities: &[City], epsilon: f64) -> ClimbResult {
        let mut tour = initial.to_vec();
        let mut cost = tour_cost(&tour, cities);
        let mut iterations = 0usize;

        loop {
            let mut best_move = None;
            let mut best_delta = -epsilon;

            for (i, k) in iter_two_opt_moves(&tour) {
                let delta = two_opt_delta(&tour, cities, i, k);
                if delta < best_delta {
                    best_delta = delta;
                    best_move = Some((i, k));
                }
            }

            let Some((i, k)) = best_move else {
                break;
            };
            apply_two_opt_in_place(&mut tour, i, k);
            cost += best_delta;
            iterations += 1;
            trace!(i, k, delta = best_delta, cost, "accepted 2-opt move");
        }

        ClimbResult {
            tour,
            cost,
            iterations,
        }
    }

    /// Random-restart hill climbing over `cities`.
    ///
    /// Every initial tour is drawn from `rng`; the stream is never reseeded
    /// between restarts.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] if `config` is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_gridsearch::random::create_rng;
    /// use u_gridsearch::tsp::{CityConfig, HillClimbRunner, RestartConfig};
    ///
    /// let mut rng = create_rng(7);
    /// let cities = CityConfig::new(15).generate(&mut rng).unwrap();
    /// let config = RestartConfig::default().with_restarts(3).with_seed(7);
    /// let outcome = HillClimbRunner::run(&cities, &config, &mut rng).unwrap();
    /// assert_eq!(outcome.records.len(), 3);
    /// ```
    pub fn run<R: Rng>(
        cities: &[City],
        config: &RestartConfig,
        rng: &mut R,
    ) -> Result<RestartOutcome> {
        config.validate().map_err(SearchError::Config)?;
        let n = cities.len();

        let mut best: Option<(Tour, f64)> = None;
        let mut records = Vec::with_capacity(config.restarts);

        for restart_index in 1..=config.restarts {
            let initial = random_tour(n, rng);
            let initial_cost = tour_cost(&initial, cities);

            let started = Instant::now();
            let local = match config.operator {
                LocalSearchOperator::TwoOpt => Self::climb(&initial, cities, config.epsilon),
            };
            let runtime_ms = started.elapsed().as_secs_f64() * 1000.0;

            debug!(
                restart_index,
                initial_cost,
                best_cost = local.cost,
                iterations = local.iterations,
                runtime_ms,
                "restart converged"
            );

            if best.as_ref().is_none_or(|(_, cost)| local.cost < *cost) {
                best = Some((local.tour.clone(), local.cost));
            }

            records.push(RestartRecord {
                algorithm: "tsp local search".to_string(),
                n_cities: n,
                seed: config.seed,
                restarts: config.restarts,
                operator: config.operator,
                restart_index,
                initial_tour: initial,
                initial_cost,
                best_tour: local.tour,
                best_cost: local.cost,
                iterations: local.iterations,
                runtime_ms,
            });
        }

        // restarts >= 1 was validated, so at least one climb ran.
        let (best_tour, best_cost) = best.unwrap_or_default();
        Ok(RestartOutcome {
            best_tour,
            best_cost,
            records,
        })
    }
}

/// Best-improvement 2-opt climb with the default tolerance.
pub fn hill_climb_best_improvement(initial: &[usize], cities: &[City]) -> ClimbResult {
    HillClimbRunner::climb(initial, cities, RestartConfig::default().epsilon)
}

/// Random-restart hill climbing; see [`HillClimbRunner::run`].
pub fn random_restart_hill_climbing<R: Rng>(
    cities: &[City],
    config: &RestartConfig,
    rng: &mut R,
) -> Result<RestartOutcome> {
    HillClimbRunner::run(cities, config, rng)
}
