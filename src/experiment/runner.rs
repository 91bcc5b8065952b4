//! Sweep execution.
//!
//! Runs produce plain records; persisting them is left to the caller.

use tracing::info;

use super::config::{Algorithm, GridExperimentConfig, TspExperimentConfig};
use crate::error::{Result, SearchError};
use crate::grid::{path_cost, Cell, CostTable, GridConfig};
use crate::random::create_rng;
use crate::search::{astar, bfs, dfs, ucs, HeuristicKind, SearchRecord, SearchStatus};
use crate::tsp::{City, HillClimbRunner, RestartRecord, Tour};

/// One grid search run with its inputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRunRecord {
    pub algorithm: Algorithm,
    /// Set for A* runs only.
    pub heuristic: Option<HeuristicKind>,
    pub m: usize,
    pub n: usize,
    pub start: Cell,
    pub goal: Cell,
    pub min_cost: u32,
    pub max_cost: u32,
    pub seed: u64,
    /// States of the returned path; empty on failure.
    pub path: Vec<Cell>,
    pub steps: usize,
    /// Path cost under the run's cost table. For BFS and DFS this is the
    /// cost of the path they found, not an optimum.
    pub total_cost: Option<u64>,
    pub expanded_states: usize,
    pub generated_nodes: usize,
    pub max_frontier_size: usize,
    pub runtime_ms: f64,
    pub status: SearchStatus,
}

/// Random-restart result for one `(city count, seed)` pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspRunSummary {
    pub n_cities: usize,
    pub seed: u64,
    pub cities: Vec<City>,
    pub best_tour: Tour,
    pub best_cost: f64,
    pub records: Vec<RestartRecord>,
}

/// Runs one algorithm on one grid.
///
/// `heuristic` is required for [`Algorithm::AStar`] and ignored otherwise.
///
/// # Errors
///
/// [`SearchError::Config`] if A* is requested without a heuristic, or
/// [`SearchError::MissingCost`] if `costs` is malformed.
pub fn run_grid_once(
    algorithm: Algorithm,
    heuristic: Option<HeuristicKind>,
    grid: &GridConfig,
    start: Cell,
    goal: Cell,
    costs: &CostTable,
) -> Result<GridRunRecord> {
    let (rows, cols) = (grid.rows, grid.cols);
    let (record, heuristic) = match algorithm {
        Algorithm::Bfs => {
            let record = bfs(start, goal, rows, cols).into_record();
            (with_path_cost(record, costs)?, None)
        }
        Algorithm::Dfs => {
            let record = dfs(start, goal, rows, cols).into_record();
            (with_path_cost(record, costs)?, None)
        }
        Algorithm::Ucs => (ucs(start, goal, rows, cols, costs)?.into_record(), None),
        Algorithm::AStar => {
            let kind = heuristic.ok_or_else(|| SearchError::config("astar requires a heuristic"))?;
            (astar(rows, cols, start, goal, costs, &kind)?, Some(kind))
        }
    };

    Ok(GridRunRecord {
        algorithm,
        heuristic,
        m: rows,
        n: cols,
        start,
        goal,
        min_cost: grid.min_cost,
        max_cost: grid.max_cost,
        seed: grid.seed,
        path: record.states,
        steps: record.steps,
        total_cost: record.total_cost,
        expanded_states: record.expanded_states,
        generated_nodes: record.generated_nodes,
        max_frontier_size: record.max_frontier_size,
        runtime_ms: record.runtime_ms,
        status: record.status,
    })
}

fn with_path_cost(mut record: SearchRecord, costs: &CostTable) -> Result<SearchRecord> {
    if record.is_success() {
        record.total_cost = Some(path_cost(&record.states, &record.actions, costs)?);
    }
    Ok(record)
}

/// Runs the full grid sweep.
///
/// One cost table is built per `(size, seed)` and shared by every
/// algorithm on that grid, so their results are directly comparable.
///
/// # Errors
///
/// [`SearchError::Config`] if the configuration is invalid.
pub fn run_grid_experiment(config: &GridExperimentConfig) -> Result<Vec<GridRunRecord>> {
    config.validate().map_err(SearchError::Config)?;
    let mut records = Vec::with_capacity(config.run_count());

    for &(rows, cols) in &config.sizes {
        let goal = Cell::new(rows as i64 - 1, cols as i64 - 1);
        for &seed in &config.seeds {
            let grid = config.grid((rows, cols), seed);
            let costs = grid.build_costs()?;
            for &algorithm in &config.algorithms {
                let start = config.start;
                if algorithm == Algorithm::AStar {
                    for &kind in &config.heuristics {
                        let record =
                            run_grid_once(algorithm, Some(kind), &grid, start, goal, &costs)?;
                        records.push(record);
                    }
                } else {
                    records.push(run_grid_once(algorithm, None, &grid, start, goal, &costs)?);
                }
            }
        }
    }

    let successes = records
        .iter()
        .filter(|r| r.status == SearchStatus::Success)
        .count();
    info!(runs = records.len(), successes, "grid experiment finished");
    Ok(records)
}

/// Generates `n_cities` cities and runs random-restart hill climbing, all
/// from a single stream seeded with `seed`.
///
/// # Errors
///
/// [`SearchError::Config`] if the configuration is invalid.
pub fn run_tsp_instance(
    n_cities: usize,
    seed: u64,
    config: &TspExperimentConfig,
) -> Result<TspRunSummary> {
    let mut rng = create_rng(seed);
    let cities = config.cities(n_cities).generate(&mut rng)?;
    let outcome = HillClimbRunner::run(&cities, &config.restart(seed), &mut rng)?;
    Ok(TspRunSummary {
        n_cities,
        seed,
        cities,
        best_tour: outcome.best_tour,
        best_cost: outcome.best_cost,
        records: outcome.records,
    })
}

/// Runs the full TSP sweep.
///
/// # Errors
///
/// [`SearchError::Config`] if the configuration is invalid.
pub fn run_tsp_experiment(config: &TspExperimentConfig) -> Result<Vec<TspRunSummary>> {
    config.validate().map_err(SearchError::Config)?;
    let mut summaries = Vec::with_capacity(config.sizes.len() * config.seeds.len());

    for &n_cities in &config.sizes {
        for &seed in &config.seeds {
            summaries.push(run_tsp_instance(n_cities, seed, config)?);
        }
    }

    info!(
        runs = summaries.len(),
        restarts = summaries.iter().map(|s| s.records.len()).sum::<usize>(),
        "tsp experiment finished"
    );
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_costs;

    fn small_grid_config() -> GridExperimentConfig {
        GridExperimentConfig::default()
            .with_sizes(vec![(4, 4), (6, 5)])
            .with_seeds(vec![1, 2])
    }

    #[test]
    fn test_grid_experiment_record_count_and_shape() {
        let config = small_grid_config();
        let records = run_grid_experiment(&config).unwrap();
        assert_eq!(records.len(), config.run_count());
        assert_eq!(records.len(), 2 * 2 * 5);

        for r in &records {
            assert_eq!(r.status, SearchStatus::Success);
            assert_eq!(r.path.first(), Some(&r.start));
            assert_eq!(r.goal, Cell::new(r.m as i64 - 1, r.n as i64 - 1));
            assert_eq!(r.path.last(), Some(&r.goal));
            assert_eq!(r.steps + 1, r.path.len());
            assert!(r.total_cost.is_some());
            assert_eq!(r.heuristic.is_some(), r.algorithm == Algorithm::AStar);
        }
    }

    #[test]
    fn test_grid_experiment_ucs_and_astar_agree() {
        let records = run_grid_experiment(&small_grid_config()).unwrap();
        for chunk in records.chunks(5) {
            let ucs_cost = chunk
                .iter()
                .find(|r| r.algorithm == Algorithm::Ucs)
                .unwrap()
                .total_cost;
            let manhattan = chunk
                .iter()
                .find(|r| r.heuristic == Some(HeuristicKind::Manhattan))
                .unwrap();
            assert_eq!(manhattan.total_cost, ucs_cost);
            for r in chunk {
                assert!(r.total_cost >= ucs_cost, "{} beat ucs", r.algorithm);
            }
        }
    }

    #[test]
    fn test_grid_experiment_is_reproducible() {
        let strip = |rs: Vec<GridRunRecord>| {
            rs.into_iter()
                .map(|r| (r.algorithm, r.heuristic, r.path, r.total_cost))
                .collect::<Vec<_>>()
        };
        let a = strip(run_grid_experiment(&small_grid_config()).unwrap());
        let b = strip(run_grid_experiment(&small_grid_config()).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_grid_once_astar_requires_heuristic() {
        let grid = GridConfig::new(3, 3);
        let costs = build_costs(3, 3, 1, 9, 0).unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(2, 2));
        let err = run_grid_once(Algorithm::AStar, None, &grid, start, goal, &costs).unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn test_run_grid_once_bfs_failure_has_no_cost() {
        let grid = GridConfig::new(3, 3);
        let costs = build_costs(3, 3, 1, 9, 0).unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(7, 7));
        let r = run_grid_once(Algorithm::Bfs, None, &grid, start, goal, &costs).unwrap();
        assert_eq!(r.status, SearchStatus::Failure);
        assert!(r.path.is_empty());
        assert_eq!(r.total_cost, None);
    }

    #[test]
    fn test_tsp_instance_reproducible() {
        let config = TspExperimentConfig::default().with_restarts(3);
        let a = run_tsp_instance(15, 4, &config).unwrap();
        let b = run_tsp_instance(15, 4, &config).unwrap();
        assert_eq!(a.cities, b.cities);
        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.records.len(), 3);
        assert!(a.records.iter().all(|r| r.seed == 4 && r.n_cities == 15));
    }

    #[test]
    fn test_tsp_experiment_counts() {
        let config = TspExperimentConfig::default()
            .with_sizes(vec![8, 12])
            .with_seeds(vec![1, 2, 3])
            .with_restarts(2);
        let summaries = run_tsp_experiment(&config).unwrap();
        assert_eq!(summaries.len(), 6);
        for s in &summaries {
            assert_eq!(s.records.len(), 2);
            let min = s
                .records
                .iter()
                .map(|r| r.best_cost)
                .fold(f64::INFINITY, f64::min);
            assert!(s.best_cost <= min);
        }
    }

    #[test]
    fn test_tsp_experiment_rejects_invalid() {
        let config = TspExperimentConfig::default().with_seeds(vec![]);
        let result = run_tsp_experiment(&config);
        assert!(matches!(result, Err(SearchError::Config(_))));
    }
}
