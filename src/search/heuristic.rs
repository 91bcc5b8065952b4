//! Heuristic estimates of the remaining cost to the goal.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::grid::Cell;

/// Estimates the cost from `state` to `goal`.
///
/// Implemented for [`HeuristicKind`] and for any `Fn(Cell, Cell) -> f64`,
/// so closures can be passed straight to [`astar`](super::astar).
pub trait Heuristic {
    fn estimate(&self, state: Cell, goal: Cell) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(Cell, Cell) -> f64,
{
    fn estimate(&self, state: Cell, goal: Cell) -> f64 {
        self(state, goal)
    }
}

/// `|Δrow| + |Δcol|`. Admissible and consistent on a 4-connected grid with
/// edge costs of at least 1.
pub fn manhattan(state: Cell, goal: Cell) -> f64 {
    state.row.abs_diff(goal.row) as f64 + state.col.abs_diff(goal.col) as f64
}

/// Straight-line distance `sqrt(Δrow² + Δcol²)`. Never exceeds
/// [`manhattan`].
pub fn euclidean(state: Cell, goal: Cell) -> f64 {
    let dr = state.row.abs_diff(goal.row) as f64;
    let dc = state.col.abs_diff(goal.col) as f64;
    dr.hypot(dc)
}

/// The built-in heuristics, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    Manhattan,
    Euclidean,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Manhattan, HeuristicKind::Euclidean];

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Euclidean => "euclidean",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, state: Cell, goal: Cell) -> f64 {
        match self {
            HeuristicKind::Manhattan => manhattan(state, goal),
            HeuristicKind::Euclidean => euclidean(state, goal),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(HeuristicKind::Manhattan),
            "euclidean" => Ok(HeuristicKind::Euclidean),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}
