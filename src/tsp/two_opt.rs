//! The 2-opt neighborhood.
//!
//! A 2-opt move `(i, k)` reverses the tour segment `tour[i..=k]`, replacing
//! edges `(a, b)` and `(c, d)` with `(a, c)` and `(b, d)`, where
//! `a = tour[i-1]`, `b = tour[i]`, `c = tour[k]`, `d = tour[(k+1) % n]`.
//! Moves are enumerated with `i >= 1`, so `i - 1` never wraps.

use std::iter::FusedIterator;

use super::types::City;

/// Cost change from applying move `(i, k)`, computed in O(1).
///
/// Negative values are improvements. Requires `1 <= i < k <= n - 1`.
pub fn two_opt_delta(tour: &[usize], cities: &[City], i: usize, k: usize) -> f64 {
    let n = tour.len();
    debug_assert!(
        1 <= i && i < k && k < n,
        "invalid 2-opt move ({i}, {k}) for n = {n}"
    );

    let a = &cities[tour[i - 1]];
    let b = &cities[tour[i]];
    let c = &cities[tour[k]];
    let d = &cities[tour[(k + 1) % n]];

    let before = a.distance(b) + c.distance(d);
    let after = a.distance(c) + b.distance(d);
    after - before
}

/// Returns a new tour with `tour[i..=k]` reversed.
pub fn apply_two_opt(tour: &[usize], i: usize, k: usize) -> Vec<usize> {
    let mut next = tour.to_vec();
    apply_two_opt_in_place(&mut next, i, k);
    next
}

/// Reverses `tour[i..=k]` in place.
pub fn apply_two_opt_in_place(tour: &mut [usize], i: usize, k: usize) {
    tour[i..=k].reverse();
}

/// All 2-opt moves `(i, k)` with `1 <= i < n - 1` and `i < k <= n - 1`,
/// in lexicographic order.
///
/// Calling [`iter_two_opt_moves`] again starts a fresh pass.
#[derive(Debug, Clone)]
pub struct TwoOptMoves {
    n: usize,
    i: usize,
    k: usize,
}

/// Enumerates the 2-opt neighborhood of `tour`.
pub fn iter_two_opt_moves(tour: &[usize]) -> TwoOptMoves {
    TwoOptMoves {
        n: tour.len(),
        i: 1,
        k: 2,
    }
}

impl Iterator for TwoOptMoves {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.i + 1 >= self.n {
            return None;
        }
        let item = (self.i, self.k);
        self.k += 1;
        if self.k >= self.n {
            self.i += 1;
            self.k = self.i + 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.i + 1 >= self.n {
            return (0, Some(0));
        }
        // Rest of the current row, then full rows for i+1 ..= n-2.
        let current = self.n - self.k;
        let rows_left = self.n - 2 - self.i;
        let remaining = current + rows_left * (rows_left + 1) / 2;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TwoOptMoves {}

impl FusedIterator for TwoOptMoves {}
