//! Benchmark sweeps.
//!
//! Runs the grid searches across sizes, seeds and heuristics, and the TSP
//! optimizer across city counts and seeds, returning one record per run.
//! No files are read or written here.

mod config;
mod runner;

pub use config::{Algorithm, GridExperimentConfig, TspExperimentConfig, DEFAULT_SEEDS};
pub use runner::{
    run_grid_experiment, run_grid_once, run_tsp_experiment, run_tsp_instance, GridRunRecord,
    TspRunSummary,
};
