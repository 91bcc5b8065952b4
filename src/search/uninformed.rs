//! Breadth-first and depth-first search.
//!
//! Both engines run the same loop and differ only in the frontier
//! discipline. Every legal edge costs 1. Duplicates are allowed in the
//! frontier; the explored set is consulted only when a node is popped.

use std::collections::HashSet;

use super::frontier::{FifoFrontier, Frontier, LifoFrontier};
use super::node::{Node, NodeArena};
use super::types::{SearchOutcome, Tally};
use crate::grid::{in_bounds, successors, Cell};

/// Breadth-first search on a `rows` x `cols` grid.
///
/// The returned path has the minimum number of moves.
///
/// # Examples
///
/// ```
/// use u_gridsearch::grid::Cell;
/// use u_gridsearch::search::bfs;
///
/// let outcome = bfs(Cell::new(0, 0), Cell::new(2, 2), 3, 3);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.actions().len(), 4);
/// assert_eq!(outcome.states().len(), 5);
/// ```
pub fn bfs(start: Cell, goal: Cell, rows: usize, cols: usize) -> SearchOutcome {
    graph_search("bfs", FifoFrontier::default(), start, goal, rows, cols)
}

/// Depth-first search on a `rows` x `cols` grid.
///
/// Successors are pushed in U, D, L, R order, so the last legal one is
/// explored first. Paths are valid but generally not shortest.
pub fn dfs(start: Cell, goal: Cell, rows: usize, cols: usize) -> SearchOutcome {
    graph_search("dfs", LifoFrontier::default(), start, goal, rows, cols)
}

fn graph_search<F: Frontier>(
    algorithm: &'static str,
    mut frontier: F,
    start: Cell,
    goal: Cell,
    rows: usize,
    cols: usize,
) -> SearchOutcome {
    let mut tally = Tally::start(algorithm);
    let mut arena = NodeArena::new();
    frontier.push(arena.push(Node::root(start)));

    if !in_bounds(start, rows, cols) {
        return tally.failure();
    }

    let mut explored: HashSet<Cell> = HashSet::new();

    while let Some(id) = frontier.pop() {
        let node = arena[id];

        // Goal test precedes the explored check, so start == goal costs
        // zero expansions.
        if node.state == goal {
            let path = arena.extract_path(id);
            return tally.success(path, None);
        }

        if !explored.insert(node.state) {
            continue;
        }
        tally.expanded += 1;

        for (action, next) in successors(node.state, rows, cols) {
            frontier.push(arena.push(Node::child(next, id, action, node.g + 1)));
            tally.generated += 1;
            tally.observe_frontier(frontier.len());
        }
    }

    tally.failure()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{step, Action};

    fn assert_valid_path(
        outcome: &SearchOutcome,
        start: Cell,
        goal: Cell,
        rows: usize,
        cols: usize,
    ) {
        let states = outcome.states();
        let actions = outcome.actions();
        assert_eq!(states.first(), Some(&start), "path must start at start");
        assert_eq!(states.last(), Some(&goal), "path must end at goal");
        assert_eq!(actions.len(), states.len() - 1);
        for (i, &a) in actions.iter().enumerate() {
            assert_eq!(step(states[i], a), states[i + 1], "action mismatch at {i}");
            assert!(in_bounds(states[i + 1], rows, cols));
        }
    }

    #[test]
    fn test_bfs_3x3_corner_to_corner() {
        let outcome = bfs(Cell::new(0, 0), Cell::new(2, 2), 3, 3);
        assert!(outcome.is_success());
        assert_eq!(outcome.actions().len(), 4);
        assert_eq!(outcome.states().len(), 5);
        assert_valid_path(&outcome, Cell::new(0, 0), Cell::new(2, 2), 3, 3);
        assert_eq!(outcome.metrics.total_cost, None);
    }

    #[test]
    fn test_bfs_shortest_equals_manhattan() {
        let (rows, cols) = (7, 9);
        let start = Cell::new(1, 2);
        for goal in [Cell::new(6, 8), Cell::new(0, 0), Cell::new(1, 7), Cell::new(4, 2)] {
            let outcome = bfs(start, goal, rows, cols);
            let manhattan = goal.row.abs_diff(start.row) + goal.col.abs_diff(start.col);
            assert_eq!(outcome.actions().len() as u64, manhattan, "goal {goal}");
            assert_valid_path(&outcome, start, goal, rows, cols);
        }
    }

    #[test]
    fn test_bfs_start_is_goal() {
        let outcome = bfs(Cell::new(1, 1), Cell::new(1, 1), 3, 3);
        assert!(outcome.is_success());
        assert_eq!(outcome.states(), &[Cell::new(1, 1)]);
        assert!(outcome.actions().is_empty());
        assert_eq!(outcome.metrics.expanded_states, 0);
        assert_eq!(outcome.metrics.generated_nodes, 1);
        assert_eq!(outcome.metrics.max_frontier_size, 1);
    }

    #[test]
    fn test_dfs_start_is_goal() {
        let outcome = dfs(Cell::new(2, 0), Cell::new(2, 0), 4, 4);
        assert!(outcome.is_success());
        assert_eq!(outcome.states().len(), 1);
        assert_eq!(outcome.metrics.expanded_states, 0);
    }

    #[test]
    fn test_bfs_out_of_bounds_goal_fails() {
        let outcome = bfs(Cell::new(0, 0), Cell::new(5, 5), 3, 3);
        assert!(!outcome.is_success());
        assert!(outcome.states().is_empty());
        assert!(outcome.actions().is_empty());
        // Every cell gets expanded exactly once before giving up.
        assert_eq!(outcome.metrics.expanded_states, 9);
        assert!(outcome.metrics.generated_nodes >= 1);
    }

    #[test]
    fn test_dfs_out_of_bounds_goal_fails() {
        let outcome = dfs(Cell::new(0, 0), Cell::new(-1, 0), 3, 3);
        assert!(!outcome.is_success());
        assert!(outcome.states().is_empty());
        assert_eq!(outcome.metrics.expanded_states, 9);
    }

    #[test]
    fn test_out_of_bounds_start_fails_immediately() {
        let outcome = bfs(Cell::new(-1, 0), Cell::new(0, 0), 3, 3);
        assert!(!outcome.is_success());
        assert_eq!(outcome.metrics.expanded_states, 0);
        assert_eq!(outcome.metrics.generated_nodes, 1);
    }

    #[test]
    fn test_dfs_finds_valid_path() {
        let (rows, cols) = (6, 6);
        let start = Cell::new(0, 0);
        let goal = Cell::new(5, 3);
        let outcome = dfs(start, goal, rows, cols);
        assert!(outcome.is_success());
        assert_valid_path(&outcome, start, goal, rows, cols);
    }

    #[test]
    fn test_dfs_prefers_last_successor() {
        // From (1, 1) the last legal action is Right, so DFS heads right first.
        let outcome = dfs(Cell::new(1, 1), Cell::new(1, 2), 3, 3);
        assert_eq!(outcome.actions(), &[Action::Right]);
        assert_eq!(outcome.metrics.expanded_states, 1);
    }

    #[test]
    fn test_bfs_counts_on_small_grid() {
        // 1x3 strip, start at the left end, goal at the right end.
        // Pop (0,0): expand, push (0,1).        generated 2
        // Pop (0,1): expand, push (0,0),(0,2).  generated 4, frontier 2
        // Pop (0,0): already explored.
        // Pop (0,2): goal.
        let outcome = bfs(Cell::new(0, 0), Cell::new(0, 2), 1, 3);
        assert!(outcome.is_success());
        assert_eq!(outcome.metrics.expanded_states, 2);
        assert_eq!(outcome.metrics.generated_nodes, 4);
        assert_eq!(outcome.metrics.max_frontier_size, 2);
    }
}
