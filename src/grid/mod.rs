//! Grid model.
//!
//! A rectangular grid of `rows` x `cols` cells with 4-directional moves and
//! directed, randomly generated edge costs. Cost generation is
//! reproducible: the same size, cost range and seed always yield the same
//! table, entry for entry.

mod config;
mod costs;
mod types;

pub use config::GridConfig;
pub use costs::{build_costs, path_cost, CostTable};
pub use types::{in_bounds, move_by_token, step, successors, Action, Cell};
