//! Experiment sweep configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::grid::{Cell, GridConfig};
use crate::search::HeuristicKind;
use crate::tsp::{CityConfig, LocalSearchOperator, RestartConfig};

/// Seeds used by the reference experiment sweeps.
pub const DEFAULT_SEEDS: [u64; 10] = [1, 2, 3, 4, 5, 10, 20, 30, 50, 100];

/// Grid search algorithm selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Grid sweep: every size x seed x algorithm (x heuristic for A*).
///
/// The goal of each run is the bottom-right cell of its grid.
///
/// # Examples
///
/// ```
/// use u_gridsearch::experiment::{Algorithm, GridExperimentConfig};
///
/// let config = GridExperimentConfig::default()
///     .with_sizes(vec![(5, 5)])
///     .with_seeds(vec![1, 2])
///     .with_algorithms(vec![Algorithm::Bfs, Algorithm::Ucs]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.run_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridExperimentConfig {
    /// `(rows, cols)` pairs.
    pub sizes: Vec<(usize, usize)>,
    pub seeds: Vec<u64>,
    pub min_cost: u32,
    pub max_cost: u32,
    pub start: Cell,
    pub algorithms: Vec<Algorithm>,
    /// Heuristics tried for every A* run.
    pub heuristics: Vec<HeuristicKind>,
}

impl Default for GridExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![(10, 10), (25, 25), (50, 50)],
            seeds: DEFAULT_SEEDS.to_vec(),
            min_cost: 1,
            max_cost: 9,
            start: Cell::new(0, 0),
            algorithms: Algorithm::ALL.to_vec(),
            heuristics: HeuristicKind::ALL.to_vec(),
        }
    }
}

impl GridExperimentConfig {
    pub fn with_sizes(mut self, sizes: Vec<(usize, usize)>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_cost_range(mut self, min_cost: u32, max_cost: u32) -> Self {
        self.min_cost = min_cost;
        self.max_cost = max_cost;
        self
    }

    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = start;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_heuristics(mut self, heuristics: Vec<HeuristicKind>) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Grid config for one `(size, seed)` cell of the sweep.
    pub fn grid(&self, (rows, cols): (usize, usize), seed: u64) -> GridConfig {
        GridConfig::new(rows, cols)
            .with_cost_range(self.min_cost, self.max_cost)
            .with_seed(seed)
    }

    /// Number of records a sweep produces.
    pub fn run_count(&self) -> usize {
        let per_grid: usize = self
            .algorithms
            .iter()
            .map(|a| match a {
                Algorithm::AStar => self.heuristics.len(),
                _ => 1,
            })
            .sum();
        self.sizes.len() * self.seeds.len() * per_grid
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sizes.is_empty() {
            return Err("at least one grid size is required".into());
        }
        if self.seeds.is_empty() {
            return Err("at least one seed is required".into());
        }
        if self.algorithms.is_empty() {
            return Err("at least one algorithm is required".into());
        }
        if self.algorithms.contains(&Algorithm::AStar) && self.heuristics.is_empty() {
            return Err("astar requires at least one heuristic".into());
        }
        for &size in &self.sizes {
            self.grid(size, 0).validate()?;
        }
        Ok(())
    }
}

/// TSP sweep: every city count x seed, one random-restart run each.
#[derive(Debug, Clone, PartialEq)]
pub struct TspExperimentConfig {
    /// City counts.
    pub sizes: Vec<usize>,
    pub seeds: Vec<u64>,
    pub coord_min: f64,
    pub coord_max: f64,
    pub restarts: usize,
    pub operator: LocalSearchOperator,
}

impl Default for TspExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: vec![20, 30, 50],
            seeds: DEFAULT_SEEDS.to_vec(),
            coord_min: 0.0,
            coord_max: 100.0,
            restarts: 10,
            operator: LocalSearchOperator::TwoOpt,
        }
    }
}

impl TspExperimentConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_coord_range(mut self, coord_min: f64, coord_max: f64) -> Self {
        self.coord_min = coord_min;
        self.coord_max = coord_max;
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn cities(&self, count: usize) -> CityConfig {
        CityConfig::new(count).with_coord_range(self.coord_min, self.coord_max)
    }

    pub fn restart(&self, seed: u64) -> RestartConfig {
        RestartConfig::default()
            .with_restarts(self.restarts)
            .with_seed(seed)
            .with_operator(self.operator)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.sizes.is_empty() {
            return Err("at least one city count is required".into());
        }
        if self.seeds.is_empty() {
            return Err("at least one seed is required".into());
        }
        self.cities(0).validate()?;
        self.restart(0).validate()
    }
}
