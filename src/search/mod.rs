//! Grid path search.
//!
//! Four engines share one node model and one metrics model:
//!
//! - **BFS** ([`bfs`]): FIFO frontier, unit edge costs, fewest moves.
//! - **DFS** ([`dfs`]): LIFO frontier, unit edge costs.
//! - **UCS** ([`ucs`]): priority queue on path cost `g` over a
//!   [`CostTable`](crate::grid::CostTable).
//! - **A\*** ([`astar`]): priority queue on `f = g + h` with a pluggable
//!   [`Heuristic`].
//!
//! Priority-queue engines break ties by push order, so results are
//! reproducible across runs. A search that cannot reach its goal returns a
//! normal failure outcome with an empty path.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 3

mod astar;
mod frontier;
mod heuristic;
pub mod node;
mod types;
mod ucs;
mod uninformed;

pub use astar::{astar, astar_search};
pub use heuristic::{euclidean, manhattan, Heuristic, HeuristicKind};
pub use node::{Node, NodeArena, NodeId, Path};
pub use types::{SearchMetrics, SearchOutcome, SearchRecord, SearchStatus};
pub use ucs::ucs;
pub use uninformed::{bfs, dfs};
