//! A* search.
//!
//! Best-first search on `f = g + h` with the same lazy-deletion scheme as
//! [`ucs`](super::ucs): duplicates are pushed, and a popped node is expanded
//! only if its `g` improves on the best recorded for its state. A closed
//! state is expanded again only when a cheaper copy of it is popped later;
//! there is no explicit reopening or decrease-key. The first goal pop is
//! cost-optimal when the heuristic is consistent (e.g. [`manhattan`]).
//! Callers supplying an inconsistent or inadmissible heuristic accept that
//! the returned path may be suboptimal.
//!
//! [`manhattan`]: super::manhattan

use std::collections::HashMap;

use super::frontier::{FScore, PriorityFrontier};
use super::heuristic::Heuristic;
use super::node::{Node, NodeArena};
use super::types::{SearchOutcome, SearchRecord, Tally};
use crate::error::Result;
use crate::grid::{in_bounds, successors, Cell, CostTable};

/// Runs A* on a `rows` x `cols` grid and returns the flat result record.
///
/// # Errors
///
/// [`SearchError::MissingCost`](crate::error::SearchError::MissingCost) if
/// `costs` lacks an entry for a legal transition the search takes.
///
/// # Examples
///
/// ```
/// use u_gridsearch::grid::{build_costs, Cell};
/// use u_gridsearch::search::{astar, HeuristicKind};
///
/// let costs = build_costs(10, 10, 1, 9, 123).unwrap();
/// let goal = Cell::new(9, 9);
/// let record = astar(10, 10, Cell::new(0, 0), goal, &costs, &HeuristicKind::Manhattan).unwrap();
/// assert!(record.is_success());
/// assert_eq!(record.states.first(), Some(&Cell::new(0, 0)));
/// assert_eq!(record.steps, record.actions.len());
/// ```
pub fn astar<H>(
    rows: usize,
    cols: usize,
    start: Cell,
    goal: Cell,
    costs: &CostTable,
    heuristic: &H,
) -> Result<SearchRecord>
where
    H: Heuristic + ?Sized,
{
    astar_search(rows, cols, start, goal, costs, heuristic).map(SearchOutcome::into_record)
}

/// A* returning path and metrics separately, like the uninformed engines.
pub fn astar_search<H>(
    rows: usize,
    cols: usize,
    start: Cell,
    goal: Cell,
    costs: &CostTable,
    heuristic: &H,
) -> Result<SearchOutcome>
where
    H: Heuristic + ?Sized,
{
    let mut tally = Tally::start("astar");
    let mut arena = NodeArena::new();
    let mut frontier = PriorityFrontier::new();

    let root = Node::root(start).with_h(heuristic.estimate(start, goal));
    frontier.push(FScore(root.f()), arena.push(root));

    if !in_bounds(start, rows, cols) {
        return Ok(tally.failure());
    }

    let mut best_g: HashMap<Cell, u64> = HashMap::new();

    while let Some((_, id)) = frontier.pop() {
        let node = arena[id];

        if node.state == goal {
            let path = arena.extract_path(id);
            return Ok(tally.success(path, Some(node.g)));
        }

        if best_g.get(&node.state).is_some_and(|&best| best <= node.g) {
            continue;
        }
        best_g.insert(node.state, node.g);
        tally.expanded += 1;

        for (action, next) in successors(node.state, rows, cols) {
            let g = node.g + u64::from(costs.cost(node.state, action)?);
            let child = Node::child(next, id, action, g).with_h(heuristic.estimate(next, goal));
            frontier.push(FScore(child.f()), arena.push(child));
            tally.generated += 1;
            tally.observe_frontier(frontier.len());
        }
    }

    Ok(tally.failure())
}
