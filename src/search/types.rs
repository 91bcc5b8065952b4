//! Run metrics and result records shared by all search engines.

use std::fmt;
use std::time::Instant;

use tracing::debug;

use super::node::Path;
use crate::grid::{Action, Cell};

/// Terminal status of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchStatus {
    /// The goal was popped from the frontier.
    Success,
    /// The frontier emptied without reaching the goal.
    Failure,
}

impl SearchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchStatus::Success => "success",
            SearchStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one search invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchMetrics {
    /// States popped and expanded (successors generated).
    pub expanded_states: usize,
    /// Nodes ever pushed onto the frontier, the start node included.
    pub generated_nodes: usize,
    /// Largest frontier size observed.
    pub max_frontier_size: usize,
    /// Wall-clock time of the search in milliseconds.
    pub runtime_ms: f64,
    pub status: SearchStatus,
    /// Accumulated path cost; set only by cost-aware searches on success.
    pub total_cost: Option<u64>,
}

/// Path plus metrics, as returned by BFS, DFS and UCS.
///
/// On failure the path is empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub path: Path,
    pub metrics: SearchMetrics,
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        self.metrics.status == SearchStatus::Success
    }

    pub fn states(&self) -> &[Cell] {
        &self.path.states
    }

    pub fn actions(&self) -> &[Action] {
        &self.path.actions
    }

    /// Flattens the outcome into a single record.
    pub fn into_record(self) -> SearchRecord {
        let SearchOutcome { path, metrics } = self;
        SearchRecord {
            status: metrics.status,
            steps: path.steps(),
            states: path.states,
            actions: path.actions,
            total_cost: metrics.total_cost,
            expanded_states: metrics.expanded_states,
            generated_nodes: metrics.generated_nodes,
            max_frontier_size: metrics.max_frontier_size,
            runtime_ms: metrics.runtime_ms,
        }
    }
}

/// Flat result record, as returned by A*.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRecord {
    pub status: SearchStatus,
    pub states: Vec<Cell>,
    pub actions: Vec<Action>,
    /// `actions.len()`.
    pub steps: usize,
    /// Path cost on success, `None` on failure.
    pub total_cost: Option<u64>,
    pub expanded_states: usize,
    pub generated_nodes: usize,
    pub max_frontier_size: usize,
    pub runtime_ms: f64,
}

impl SearchRecord {
    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Success
    }
}

/// Counters maintained while a search runs.
pub(crate) struct Tally {
    algorithm: &'static str,
    started: Instant,
    pub(crate) expanded: usize,
    pub(crate) generated: usize,
    pub(crate) max_frontier: usize,
}

impl Tally {
    /// Starts the clock. Counts the start node as generated.
    pub(crate) fn start(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            started: Instant::now(),
            expanded: 0,
            generated: 1,
            max_frontier: 1,
        }
    }

    pub(crate) fn observe_frontier(&mut self, len: usize) {
        if len > self.max_frontier {
            self.max_frontier = len;
        }
    }

    pub(crate) fn success(self, path: Path, total_cost: Option<u64>) -> SearchOutcome {
        self.finish(path, SearchStatus::Success, total_cost)
    }

    pub(crate) fn failure(self) -> SearchOutcome {
        self.finish(Path::default(), SearchStatus::Failure, None)
    }

    fn finish(self, path: Path, status: SearchStatus, total_cost: Option<u64>) -> SearchOutcome {
        let runtime_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        debug!(
            algorithm = self.algorithm,
            status = status.as_str(),
            steps = path.steps(),
            total_cost,
            expanded = self.expanded,
            generated = self.generated,
            max_frontier = self.max_frontier,
            runtime_ms,
            "search finished"
        );
        SearchOutcome {
            path,
            metrics: SearchMetrics {
                expanded_states: self.expanded,
                generated_nodes: self.generated,
                max_frontier_size: self.max_frontier,
                runtime_ms,
                status,
                total_cost,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_failure_shape() {
        let outcome = Tally::start("bfs").failure();
        assert!(!outcome.is_success());
        assert!(outcome.states().is_empty());
        assert!(outcome.actions().is_empty());
        assert_eq!(outcome.metrics.generated_nodes, 1);
        assert_eq!(outcome.metrics.max_frontier_size, 1);
        assert_eq!(outcome.metrics.expanded_states, 0);
        assert!(outcome.metrics.runtime_ms >= 0.0);
    }

    #[test]
    fn test_observe_frontier_keeps_peak() {
        let mut tally = Tally::start("dfs");
        tally.observe_frontier(4);
        tally.observe_frontier(2);
        assert_eq!(tally.max_frontier, 4);
    }

    #[test]
    fn test_into_record() {
        let path = Path {
            states: vec![Cell::new(0, 0), Cell::new(0, 1)],
            actions: vec![Action::Right],
        };
        let record = Tally::start("ucs").success(path, Some(7)).into_record();
        assert!(record.is_success());
        assert_eq!(record.steps, 1);
        assert_eq!(record.total_cost, Some(7));
        assert_eq!(record.states.len(), 2);
    }

    #[test]
    fn test_status_names() {
        assert_eq!(SearchStatus::Success.to_string(), "success");
        assert_eq!(SearchStatus::Failure.as_str(), "failure");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::grid::{build_costs, Cell};
    use crate::search::{astar, bfs, HeuristicKind, SearchOutcome, SearchRecord};

    #[test]
    fn test_outcome_and_record_round_trip() {
        let outcome = bfs(Cell::new(0, 0), Cell::new(2, 3), 4, 4);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);

        let costs = build_costs(5, 5, 1, 9, 11).unwrap();
        let (goal, h) = (Cell::new(4, 4), HeuristicKind::Manhattan);
        let record = astar(5, 5, Cell::new(0, 0), goal, &costs, &h).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"status\""));
        let back: SearchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
