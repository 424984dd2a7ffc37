//! Dense 2D grids of `Real` samples.

use crate::float_types::Real;
use nalgebra::DMatrix;

/// A `rows × cols` grid of samples, indexed as `grid[(row, col)]`.
pub type Grid = DMatrix<Real>;

/// Axis of a [`Grid`].
///
/// `Rows` walks down a column (row index changes), `Columns` walks along a
/// row (column index changes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// `count` evenly spaced samples over `[start, end]`, both ends inclusive.
///
/// The last sample is pinned to `end` so it does not drift from accumulated
/// rounding. `count == 1` yields `[start]`; `count == 0` yields nothing.
pub fn linspace(start: Real, end: Real, count: usize) -> Vec<Real> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as Real;
            let mut out: Vec<Real> = (0..count).map(|k| start + k as Real * step).collect();
            out[count - 1] = end;
            out
        },
    }
}
