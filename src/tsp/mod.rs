//! Euclidean Traveling Salesman local search.
//!
//! Cities are points in the plane, tours are permutations of city indices
//! visited cyclically. [`HillClimbRunner`] improves tours with
//! best-improvement 2-opt and wraps the climb in a random-restart driver.
//! Move evaluation is O(1) via [`two_opt_delta`]; the running tour cost is
//! updated incrementally from accepted deltas.
//!
//! # References
//!
//! - Croes, G. A. (1958), "A Method for Solving Traveling-Salesman Problems"
//! - Lin, S. (1965), "Computer Solutions of the Traveling Salesman Problem"

mod config;
mod runner;
mod two_opt;
mod types;

pub use config::{CityConfig, LocalSearchOperator, RestartConfig};
pub use runner::{
    hill_climb_best_improvement, random_restart_hill_climbing, ClimbResult, HillClimbRunner,
    RestartOutcome, RestartRecord,
};
pub use two_opt::{
    apply_two_opt, apply_two_opt_in_place, iter_two_opt_moves, two_opt_delta, TwoOptMoves,
};
pub use types::{generate_cities, is_valid_tour, random_tour, tour_cost, City, Tour};
