//! Error types for u-gridsearch.
//!
//! Unreachable goals are not errors: a search that exhausts its frontier
//! returns a normal [`SearchStatus::Failure`](crate::search::SearchStatus)
//! outcome. The variants here cover programmer errors and malformed inputs.

use thiserror::Error;

use crate::grid::{Action, Cell};

/// Result type alias for u-gridsearch operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Unified error type for all u-gridsearch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A move token other than `U`, `D`, `L`, `R`.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// The cost table has no entry for a transition the engine needs.
    #[error("no cost entry for action {action} from state {state}")]
    MissingCost {
        /// State the transition starts from.
        state: Cell,
        /// Action taken from `state`.
        action: Action,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unrecognized heuristic name.
    #[error("unknown heuristic: {0} (expected manhattan or euclidean)")]
    UnknownHeuristic(String),

    /// Unrecognized search algorithm name.
    #[error("unknown algorithm: {0} (expected bfs, dfs, ucs or astar)")]
    UnknownAlgorithm(String),

    /// Unrecognized local-search operator name.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

impl SearchError {
    /// Creates a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
