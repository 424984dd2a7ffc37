//! Composite Simpson quadrature on evenly spaced samples.
//!
//! Classic composite Simpson needs an odd number of samples. For an even
//! count the first `n − 1` samples are integrated with Simpson and the last
//! interval is closed with the quadratic through the final three samples:
//! ```text
//! ∫[x_{n−2}, x_{n−1}] f ≈ h · (5 f[n−1] + 8 f[n−2] − f[n−3]) / 12
//! ```
//! which keeps the rule exact for quadratics. Two samples use the trapezoid
//! rule, and fewer than two integrate to zero.

use crate::float_types::Real;
use crate::grid::{Axis, Grid};

/// Integrate `n` evenly spaced samples read through `f`, step `spacing`.
fn simpson_by<F>(f: F, n: usize, spacing: Real) -> Real
where
    F: Fn(usize) -> Real,
{
    match n {
        0 | 1 => 0.0,
        2 => 0.5 * spacing * (f(0) + f(1)),
        _ if n % 2 == 1 => simpson_odd(&f, n, spacing),
        _ => {
            let head = simpson_odd(&f, n - 1, spacing);
            let tail = spacing * (5.0 * f(n - 1) + 8.0 * f(n - 2) - f(n - 3)) / 12.0;
            head + tail
        },
    }
}

/// Composite Simpson over the first `n` samples, `n` odd and at least 3.
fn simpson_odd<F>(f: &F, n: usize, spacing: Real) -> Real
where
    F: Fn(usize) -> Real,
{
    debug_assert!(n >= 3 && n % 2 == 1);

    let interior: Real = (1..n - 1)
        .map(|k| if k % 2 == 1 { 4.0 * f(k) } else { 2.0 * f(k) })
        .sum();
    spacing / 3.0 * (f(0) + interior + f(n - 1))
}

/// Integrate evenly spaced `samples` with step `spacing`.
pub fn simpson(samples: &[Real], spacing: Real) -> Real {
    simpson_by(|k| samples[k], samples.len(), spacing)
}

/// Integrate every line of `grid` running along `axis`.
///
/// Integrating along `Axis::Rows` collapses the row index and yields one
/// value per column; `Axis::Columns` yields one value per row.
pub fn simpson_along(grid: &Grid, axis: Axis, spacing: Real) -> Vec<Real> {
    let (rows, cols) = grid.shape();
    match axis {
        Axis::Rows => (0..cols)
            .map(|j| simpson_by(|i| grid[(i, j)], rows, spacing))
            .collect(),
        Axis::Columns => (0..rows)
            .map(|i| simpson_by(|j| grid[(i, j)], cols, spacing))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: Real = 1e3 * Real::EPSILON;

    fn sample<F: Fn(Real) -> Real>(f: F, a: Real, b: Real, n: usize) -> (Vec<Real>, Real) {
        let h = (b - a) / (n - 1) as Real;
        ((0..n).map(|k| f(a + k as Real * h)).collect(), h)
    }

    #[test]
    fn odd_count_is_exact_for_cubics() {
        let (f, h) = sample(|x| x * x * x - 2.0 * x + 1.0, 0.0, 2.0, 9);
        // ∫₀² x³ − 2x + 1 dx = 4 − 4 + 2
        assert_relative_eq!(simpson(&f, h), 2.0, epsilon = TOL);
    }

    #[test]
    fn even_count_is_exact_for_quadratics() {
        for n in [4, 6, 10] {
            let (f, h) = sample(|x| 3.0 * x * x + x, 0.0, 1.0, n);
            // ∫₀¹ 3x² + x dx = 1.5
            assert_relative_eq!(simpson(&f, h), 1.5, epsilon = TOL);
        }
    }

    #[test]
    fn even_count_tail_formula() {
        // Hand-computed: Simpson on [1, 2, 4] plus tail (5·8 + 8·4 − 2)/12
        let got = simpson(&[1.0, 2.0, 4.0, 8.0], 1.0);
        let expected = (1.0 + 8.0 + 4.0) / 3.0 + 70.0 / 12.0;
        assert_relative_eq!(got, expected, epsilon = TOL);
    }

    #[test]
    fn two_samples_use_trapezoid() {
        assert_relative_eq!(simpson(&[1.0, 3.0], 0.5), 1.0);
    }

    #[test]
    fn too_few_samples_integrate_to_zero() {
        assert_eq!(simpson(&[], 1.0), 0.0);
        assert_eq!(simpson(&[42.0], 1.0), 0.0);
    }

    #[test]
    fn converges_on_smooth_integrand() {
        let (f, h) = sample(Real::sin, 0.0, crate::float_types::PI, 200);
        assert_relative_eq!(simpson(&f, h), 2.0, epsilon = TOL.max(1e-7));
    }

    #[test]
    fn along_rows_yields_one_value_per_column() {
        let g = Grid::from_fn(3, 2, |i, j| (i + j) as Real);
        let per_col = simpson_along(&g, Axis::Rows, 1.0);
        // column 0: [0, 1, 2] → 2, column 1: [1, 2, 3] → 4
        assert_eq!(per_col.len(), 2);
        assert_relative_eq!(per_col[0], 2.0);
        assert_relative_eq!(per_col[1], 4.0);
    }

    #[test]
    fn along_columns_yields_one_value_per_row() {
        let g = Grid::from_fn(2, 3, |i, j| (i + j) as Real);
        let per_row = simpson_along(&g, Axis::Columns, 1.0);
        assert_eq!(per_row.len(), 2);
        assert_relative_eq!(per_row[0], 2.0);
        assert_relative_eq!(per_row[1], 4.0);
    }
}
