//! Cities, tours and cycle cost.

use rand::Rng;

use crate::random::shuffle;

/// A city in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        City::new(x, y)
    }
}

/// A cyclic visiting order: a permutation of city indices `0..n`.
///
/// The last city connects back to the first.
pub type Tour = Vec<usize>;

/// Draws `n` cities uniformly from `[coord_min, coord_max]²`.
///
/// For each city `x` is drawn before `y`, cities in index order.
/// The caller guarantees `coord_min <= coord_max`, both finite; see
/// [`CityConfig::generate`](super::CityConfig::generate) for the checked
/// entry point.
pub fn generate_cities<R: Rng>(n: usize, rng: &mut R, coord_min: f64, coord_max: f64) -> Vec<City> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(coord_min..=coord_max);
            let y = rng.random_range(coord_min..=coord_max);
            City::new(x, y)
        })
        .collect()
}

/// The identity tour over `n` cities, shuffled with `rng`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    shuffle(&mut tour, rng);
    tour
}

/// Length of the closed cycle `tour[0] -> tour[1] -> ... -> tour[n-1] -> tour[0]`.
///
/// Empty and single-city tours cost 0.
pub fn tour_cost(tour: &[usize], cities: &[City]) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let open: f64 = tour
        .windows(2)
        .map(|w| cities[w[0]].distance(&cities[w[1]]))
        .sum();
    open + cities[last].distance(&cities[first])
}

/// Whether `tour` visits every index in `0..n` exactly once.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &c in tour {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}
