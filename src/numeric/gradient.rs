//! Finite-difference derivatives on evenly spaced samples.
//!
//! Interior samples use the second-order central difference
//! ```text
//! f'[k] ≈ (f[k+1] − f[k−1]) / 2h
//! ```
//! and the two end samples fall back to first-order one-sided differences
//! ```text
//! f'[0]   ≈ (f[1] − f[0]) / h
//! f'[n−1] ≈ (f[n−1] − f[n−2]) / h
//! ```

use crate::float_types::Real;
use crate::grid::{Axis, Grid};

/// Derivative at index `k` of `n` samples read through `f`.
///
/// Fewer than two samples carry no slope information and give zero.
#[inline]
fn difference_at<F>(f: F, k: usize, n: usize, spacing: Real) -> Real
where
    F: Fn(usize) -> Real,
{
    if n < 2 {
        0.0
    } else if k == 0 {
        (f(1) - f(0)) / spacing
    } else if k == n - 1 {
        (f(n - 1) - f(n - 2)) / spacing
    } else {
        (f(k + 1) - f(k - 1)) / (2.0 * spacing)
    }
}

/// Derivative of `samples` with respect to a parameter of constant step `spacing`.
pub fn gradient(samples: &[Real], spacing: Real) -> Vec<Real> {
    let n = samples.len();
    (0..n)
        .map(|k| difference_at(|m| samples[m], k, n, spacing))
        .collect()
}

/// Partial derivative of `grid` along `axis`.
///
/// `spacing` is the parameter step between neighbouring samples along that axis.
pub fn gradient_along(grid: &Grid, axis: Axis, spacing: Real) -> Grid {
    let (rows, cols) = grid.shape();
    Grid::from_fn(rows, cols, |i, j| match axis {
        Axis::Rows => difference_at(|m| grid[(m, j)], i, rows, spacing),
        Axis::Columns => difference_at(|m| grid[(i, m)], j, cols, spacing),
    })
}
