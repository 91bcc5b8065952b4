//! Directed edge-cost tables.

use std::collections::HashMap;

use rand::Rng;

use super::config::GridConfig;
use super::types::{in_bounds, Action, Cell};
use crate::error::{Result, SearchError};

/// Mapping from `(state, action)` to a positive integer edge cost.
///
/// Only legal (in-bounds) transitions have entries. Lookups of a missing
/// entry through [`CostTable::cost`] fail rather than default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostTable {
    costs: HashMap<(Cell, Action), u32>,
}

impl CostTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cost of taking `action` from `state`, returning the old value.
    pub fn insert(&mut self, state: Cell, action: Action, cost: u32) -> Option<u32> {
        self.costs.insert((state, action), cost)
    }

    /// Removes an entry, returning its cost.
    pub fn remove(&mut self, state: Cell, action: Action) -> Option<u32> {
        self.costs.remove(&(state, action))
    }

    /// Looks up a cost without failing.
    pub fn get(&self, state: Cell, action: Action) -> Option<u32> {
        self.costs.get(&(state, action)).copied()
    }

    /// Looks up a cost the search engines depend on.
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingCost`] if the entry is absent.
    pub fn cost(&self, state: Cell, action: Action) -> Result<u32> {
        self.get(state, action)
            .ok_or(SearchError::MissingCost { state, action })
    }

    pub fn contains(&self, state: Cell, action: Action) -> bool {
        self.costs.contains_key(&(state, action))
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterates entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Action, u32)> + '_ {
        self.costs.iter().map(|(&(s, a), &c)| (s, a, c))
    }
}

/// Builds the reproducible cost table for a `rows` x `cols` grid.
///
/// A fresh generator is seeded with `seed`; cells are visited in row-major
/// order and actions in [`Action::ALL`] order, drawing one integer in
/// `[min_cost, max_cost]` per legal transition. Illegal transitions consume
/// no draws.
///
/// # Errors
///
/// [`SearchError::Config`] if the grid is empty or the cost range is invalid.
pub fn build_costs(
    rows: usize,
    cols: usize,
    min_cost: u32,
    max_cost: u32,
    seed: u64,
) -> Result<CostTable> {
    GridConfig::new(rows, cols)
        .with_cost_range(min_cost, max_cost)
        .with_seed(seed)
        .build_costs()
}

/// Draw loop shared by [`build_costs`] and [`GridConfig::build_costs`].
///
/// The caller guarantees `min_cost <= max_cost`.
pub(crate) fn build_costs_with_rng<R: Rng>(
    rows: usize,
    cols: usize,
    min_cost: u32,
    max_cost: u32,
    rng: &mut R,
) -> CostTable {
    let mut table = CostTable {
        costs: HashMap::with_capacity(rows * cols * 4),
    };
    for r in 0..rows as i64 {
        for c in 0..cols as i64 {
            let state = Cell::new(r, c);
            for action in Action::ALL {
                if in_bounds(state.step(action), rows, cols) {
                    table.insert(state, action, rng.random_range(min_cost..=max_cost));
                }
            }
        }
    }
    table
}

/// Sums directed edge costs along a path.
///
/// `actions[i]` is charged from `states[i]`. Extra states beyond
/// `actions.len()` are ignored.
///
/// # Errors
///
/// [`SearchError::MissingCost`] if any step has no entry.
pub fn path_cost(states: &[Cell], actions: &[Action], costs: &CostTable) -> Result<u64> {
    states
        .iter()
        .zip(actions)
        .try_fold(0u64, |total, (&s, &a)| {
            Ok(total + u64::from(costs.cost(s, a)?))
        })
}
