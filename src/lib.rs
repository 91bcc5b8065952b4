//! Classic graph search and TSP local search on seeded synthetic instances.
//!
//! Provides reference implementations for comparing search behavior
//! (path quality, expansions, frontier growth, runtime):
//!
//! - **Grid model** ([`grid`]): 4-directional moves and reproducible,
//!   seeded directed edge costs.
//! - **Search** ([`search`]): breadth-first, depth-first, uniform-cost and
//!   A* search over a shared node/path/metrics model.
//! - **TSP** ([`tsp`]): Euclidean city generation, 2-opt neighborhood with
//!   O(1) delta evaluation, best-improvement hill climbing and a
//!   random-restart driver.
//! - **Experiments** ([`experiment`]): sweeps over sizes and seeds that
//!   return plain run records.
//!
//! Every operation is single-threaded and deterministic given its seed.
//! Random streams are always passed explicitly; see [`random`].

pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod search;
pub mod tsp;

pub use error::{Result, SearchError};
