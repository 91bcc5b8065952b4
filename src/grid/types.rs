//! Cells and moves on a rectangular grid.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A grid cell `(row, col)`, 0-indexed.
///
/// Coordinates are signed so that off-grid cells (the result of moving off
/// an edge, or an out-of-bounds goal supplied by a caller) are representable.
/// Whether a cell lies on a particular grid is answered by [`in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Row index.
    pub row: i64,
    /// Column index.
    pub col: i64,
}

impl Cell {
    /// Creates a cell.
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the cell reached by applying `action`.
    ///
    /// Total over [`Action`]; the result may be off-grid. Coordinates
    /// saturate at the `i64` limits, which no grid reaches.
    pub fn step(self, action: Action) -> Cell {
        let (dr, dc) = action.offset();
        Cell::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid moves.
///
/// Up decreases the row, Down increases it; Left and Right change the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Canonical enumeration order. Successor generation and cost-table
    /// construction both iterate in exactly this order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// `(d_row, d_col)` displacement of this move.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Single-letter token: `U`, `D`, `L` or `R`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Action::Up => "U",
            Action::Down => "D",
            Action::Left => "L",
            Action::Right => "R",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Action {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "U" => Ok(Action::Up),
            "D" => Ok(Action::Down),
            "L" => Ok(Action::Left),
            "R" => Ok(Action::Right),
            _ => Err(SearchError::InvalidAction(s.to_string())),
        }
    }
}

/// Applies `action` to `state`.
pub fn step(state: Cell, action: Action) -> Cell {
    state.step(action)
}

/// Applies a move given as a token (`"U"`, `"D"`, `"L"`, `"R"`).
///
/// # Errors
///
/// [`SearchError::InvalidAction`] for any other token.
pub fn move_by_token(state: Cell, token: &str) -> crate::error::Result<Cell> {
    let action: Action = token.parse()?;
    Ok(state.step(action))
}

/// Whether `state` lies on a grid of `rows` x `cols`.
pub fn in_bounds(state: Cell, rows: usize, cols: usize) -> bool {
    state.row >= 0
        && state.col >= 0
        && (state.row as u64) < rows as u64
        && (state.col as u64) < cols as u64
}

/// Legal `(action, next_state)` pairs from `state`, in [`Action::ALL`] order.
pub fn successors(state: Cell, rows: usize, cols: usize) -> impl Iterator<Item = (Action, Cell)> {
    Action::ALL.into_iter().filter_map(move |action| {
        let next = state.step(action);
        in_bounds(next, rows, cols).then_some((action, next))
    })
}
