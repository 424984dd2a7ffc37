//! Traits defining surface sampling operations for dependency inversion

use crate::float_types::Real;
use crate::grid::Grid;
use nalgebra::Point3;

/// Core sampling operation: evaluate a parametric surface on the tensor
/// product of two parameter sequences.
pub trait SamplerOps {
    /// Evaluate `surface(u[j], v[i])` at every `(i, j)`.
    ///
    /// Rows follow `v`, columns follow `u`. Returns the `[X, Y, Z]` coordinate
    /// grids, each `v.len() × u.len()`.
    fn sample<F>(&self, u: &[Real], v: &[Real], surface: F) -> [Grid; 3]
    where
        F: Fn(Real, Real) -> Point3<Real> + Sync + Send;
}

/// Split a row-major list of points into its three coordinate grids.
pub(crate) fn split_coordinates(rows: usize, cols: usize, points: &[Point3<Real>]) -> [Grid; 3] {
    let pick = |axis: usize| Grid::from_fn(rows, cols, |i, j| points[i * cols + j][axis]);
    [pick(0), pick(1), pick(2)]
}
