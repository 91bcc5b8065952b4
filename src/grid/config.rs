//! Grid configuration.

use super::costs::{build_costs_with_rng, CostTable};
use crate::error::{Result, SearchError};
use crate::random::create_rng;

/// Size, cost range and seed of a synthetic cost grid.
///
/// A `(rows, cols, min_cost, max_cost, seed)` tuple fully determines the
/// generated [`CostTable`].
///
/// # Examples
///
/// ```
/// use u_gridsearch::grid::GridConfig;
///
/// let config = GridConfig::new(10, 10)
///     .with_cost_range(1, 9)
///     .with_seed(123);
/// assert!(config.validate().is_ok());
/// let costs = config.build_costs().unwrap();
/// assert_eq!(costs.len(), 4 * 10 * 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of rows (`m`).
    pub rows: usize,
    /// Number of columns (`n`).
    pub cols: usize,
    /// Smallest edge cost, inclusive. Must be at least 1.
    pub min_cost: u32,
    /// Largest edge cost, inclusive.
    pub max_cost: u32,
    /// Seed for the cost generator.
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            min_cost: 1,
            max_cost: 9,
            seed: 0,
        }
    }
}

impl GridConfig {
    /// Creates a config for a `rows` x `cols` grid with default costs and seed.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_cost_range(mut self, min_cost: u32, max_cost: u32) -> Self {
        self.min_cost = min_cost;
        self.max_cost = max_cost;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "grid size must be positive, got {}x{}",
                self.rows, self.cols
            ));
        }
        if self.min_cost == 0 {
            return Err("min_cost must be at least 1".into());
        }
        if self.min_cost > self.max_cost {
            return Err(format!(
                "min_cost must be <= max_cost, got {} > {}",
                self.min_cost, self.max_cost
            ));
        }
        Ok(())
    }

    /// Generates the cost table for this grid from a freshly seeded stream.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] if the configuration is invalid.
    pub fn build_costs(&self) -> Result<CostTable> {
        self.validate().map_err(SearchError::Config)?;
        let mut rng = create_rng(self.seed);
        Ok(build_costs_with_rng(
            self.rows,
            self.cols,
            self.min_cost,
            self.max_cost,
            &mut rng,
        ))
    }
}
