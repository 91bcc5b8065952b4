//! Uniform-cost search.

use std::collections::HashMap;

use super::frontier::PriorityFrontier;
use super::node::{Node, NodeArena};
use super::types::{SearchOutcome, Tally};
use crate::error::Result;
use crate::grid::{in_bounds, successors, Cell, CostTable};

/// Uniform-cost search over directed edge costs.
///
/// The frontier is ordered by path cost `g`, ties broken by push order.
/// Stale entries are skipped on pop by comparing against the best cost
/// recorded for their state (lazy deletion, no decrease-key). The first
/// time the goal is popped its cost is optimal.
///
/// # Errors
///
/// [`SearchError::MissingCost`](crate::error::SearchError::MissingCost) if
/// `costs` lacks an entry for a legal transition the search takes.
pub fn ucs(
    start: Cell,
    goal: Cell,
    rows: usize,
    cols: usize,
    costs: &CostTable,
) -> Result<SearchOutcome> {
    let mut tally = Tally::start("ucs");
    let mut arena = NodeArena::new();
    let mut frontier = PriorityFrontier::new();
    frontier.push(0u64, arena.push(Node::root(start)));

    if !in_bounds(start, rows, cols) {
        return Ok(tally.failure());
    }

    let mut best_cost: HashMap<Cell, u64> = HashMap::new();

    while let Some((g, id)) = frontier.pop() {
        let state = arena[id].state;

        if state == goal {
            let path = arena.extract_path(id);
            return Ok(tally.success(path, Some(g)));
        }

        if best_cost.get(&state).is_some_and(|&best| best <= g) {
            continue;
        }
        best_cost.insert(state, g);
        tally.expanded += 1;

        for (action, next) in successors(state, rows, cols) {
            let next_g = g + u64::from(costs.cost(state, action)?);
            frontier.push(next_g, arena.push(Node::child(next, id, action, next_g)));
            tally.generated += 1;
            tally.observe_frontier(frontier.len());
        }
    }

    Ok(tally.failure())
}
