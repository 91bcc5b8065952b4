//! TSP instance and optimizer configuration.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::types::{generate_cities, City};
use crate::error::{Result, SearchError};

/// Neighborhood operator used by hill climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocalSearchOperator {
    /// Segment reversal; see [`two_opt_delta`](super::two_opt_delta).
    #[default]
    TwoOpt,
}

impl LocalSearchOperator {
    pub fn name(self) -> &'static str {
        match self {
            LocalSearchOperator::TwoOpt => "two_opt",
        }
    }
}

impl fmt::Display for LocalSearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LocalSearchOperator {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two_opt" | "2opt" | "2-opt" => Ok(LocalSearchOperator::TwoOpt),
            _ => Err(SearchError::UnknownOperator(s.to_string())),
        }
    }
}

/// How many cities to generate and where.
///
/// # Examples
///
/// ```
/// use u_gridsearch::random::create_rng;
/// use u_gridsearch::tsp::CityConfig;
///
/// let mut rng = create_rng(42);
/// let cities = CityConfig::new(30).generate(&mut rng).unwrap();
/// assert_eq!(cities.len(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CityConfig {
    /// Number of cities.
    pub count: usize,
    /// Lower coordinate bound, inclusive, for both axes.
    pub coord_min: f64,
    /// Upper coordinate bound, inclusive, for both axes.
    pub coord_max: f64,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            count: 20,
            coord_min: 0.0,
            coord_max: 100.0,
        }
    }
}

impl CityConfig {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_coord_range(mut self, coord_min: f64, coord_max: f64) -> Self {
        self.coord_min = coord_min;
        self.coord_max = coord_max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.coord_min.is_finite() || !self.coord_max.is_finite() {
            return Err("coordinate bounds must be finite".into());
        }
        if self.coord_min > self.coord_max {
            return Err(format!(
                "coord_min must be <= coord_max, got {} > {}",
                self.coord_min, self.coord_max
            ));
        }
        Ok(())
    }

    /// Draws the cities from `rng`.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] if the coordinate range is invalid.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<City>> {
        self.validate().map_err(SearchError::Config)?;
        let cities = generate_cities(self.count, rng, self.coord_min, self.coord_max);
        Ok(cities)
    }
}

/// Configuration for random-restart hill climbing.
///
/// `seed` and `operator` are carried into every
/// [`RestartRecord`](super::RestartRecord); the generator itself is always
/// supplied by the caller.
///
/// # Examples
///
/// ```
/// use u_gridsearch::tsp::RestartConfig;
///
/// let config = RestartConfig::default().with_restarts(5).with_seed(3);
/// assert_eq!(config.restarts, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RestartConfig {
    /// Number of independent climbs.
    pub restarts: usize,
    /// Seed the caller's generator was created from.
    pub seed: u64,
    pub operator: LocalSearchOperator,
    /// A move is accepted only if its delta is below `-epsilon`.
    ///
    /// Guards convergence against floating-point noise.
    pub epsilon: f64,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            seed: 0,
            operator: LocalSearchOperator::TwoOpt,
            epsilon: 1e-10,
        }
    }
}

impl RestartConfig {
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_operator(mut self, operator: LocalSearchOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.restarts == 0 {
            return Err("restarts must be at least 1".into());
        }
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}
