//! Distance heuristics on 2-D integer coordinates.

use crate::traits::Cost;

/// Manhattan (L1) distance. Admissible for 4-way unit-cost movement.
#[inline]
pub fn manhattan(a: (i32, i32), b: (i32, i32)) -> Cost {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Chebyshev (L∞) distance. Admissible for 8-way unit-cost movement.
#[inline]
pub fn chebyshev(a: (i32, i32), b: (i32, i32)) -> Cost {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

/// Euclidean (L2) distance, truncated towards zero.
#[inline]
pub fn euclidean(a: (i32, i32), b: (i32, i32)) -> Cost {
    let dx = f64::from(a.0 - b.0);
    let dy = f64::from(a.1 - b.1);
    dx.hypot(dy) as Cost
}
