//! Area and boundary length of a sampled strip.
//!
//! ## Surface area
//! With the tangent vectors `r_u = ∂(X, Y, Z)/∂u` and `r_v = ∂(X, Y, Z)/∂v`
//! estimated by finite differences on the sampled grids, the area element is
//! ```text
//! dA = ‖r_u × r_v‖ du dv
//! ```
//! The density grid is integrated with composite Simpson, first across `v`
//! for every column and then along the resulting `u` profile.
//!
//! ## Edge length
//! The boundary is approximated by the chords between consecutive samples
//! of the first and last rows. Because of the half twist those two rows are
//! the two halves of one closed curve; [`MobiusStrip::boundary_loop`] joins
//! them explicitly.

use super::MobiusStrip;
use crate::float_types::{Real, tolerance};
use crate::grid::{Axis, Grid};
use crate::numeric::{gradient_along, simpson, simpson_along};
use nalgebra::{Point3, Vector3};

/// Finite-difference partial derivatives of the three coordinate grids.
#[derive(Debug, Clone)]
pub struct Tangents {
    pub x_u: Grid,
    pub y_u: Grid,
    pub z_u: Grid,
    pub x_v: Grid,
    pub y_v: Grid,
    pub z_v: Grid,
}

impl Tangents {
    /// `∂r/∂u` at cell `(i, j)`.
    #[inline]
    pub fn along_u(&self, i: usize, j: usize) -> Vector3<Real> {
        Vector3::new(self.x_u[(i, j)], self.y_u[(i, j)], self.z_u[(i, j)])
    }

    /// `∂r/∂v` at cell `(i, j)`.
    #[inline]
    pub fn along_v(&self, i: usize, j: usize) -> Vector3<Real> {
        Vector3::new(self.x_v[(i, j)], self.y_v[(i, j)], self.z_v[(i, j)])
    }

    /// `r_u × r_v` at cell `(i, j)`; its length is the local area density.
    #[inline]
    pub fn cross_at(&self, i: usize, j: usize) -> Vector3<Real> {
        self.along_u(i, j).cross(&self.along_v(i, j))
    }

    /// Unit surface normal at `(i, j)`.
    ///
    /// Cells whose area density is below [`tolerance`] have no well defined
    /// normal and report `+Z`.
    pub fn normal_at(&self, i: usize, j: usize) -> Vector3<Real> {
        self.cross_at(i, j)
            .try_normalize(tolerance())
            .unwrap_or_else(Vector3::z)
    }
}

/// Both scalar results of a strip, evaluated together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub surface_area: Real,
    pub edge_length: Real,
}

/// Sum of the chord lengths between consecutive points.
pub fn polyline_length(points: &[Point3<Real>]) -> Real {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

impl MobiusStrip {
    /// Partial derivatives of X, Y and Z along `u` (columns) and `v` (rows),
    /// scaled by the actual parameter spacing.
    pub fn tangents(&self) -> Tangents {
        let (du, dv) = (self.du(), self.dv());
        Tangents {
            x_u: gradient_along(&self.x, Axis::Columns, du),
            y_u: gradient_along(&self.y, Axis::Columns, du),
            z_u: gradient_along(&self.z, Axis::Columns, du),
            x_v: gradient_along(&self.x, Axis::Rows, dv),
            y_v: gradient_along(&self.y, Axis::Rows, dv),
            z_v: gradient_along(&self.z, Axis::Rows, dv),
        }
    }

    /// Per-cell area density `‖r_u × r_v‖`.
    pub fn area_density(&self) -> Grid {
        let t = self.tangents();
        let (rows, cols) = self.x.shape();
        Grid::from_fn(rows, cols, |i, j| t.cross_at(i, j).norm())
    }

    /// Total surface area.
    ///
    /// Integrates [`area_density`](Self::area_density) over `v` and then `u`
    /// with composite Simpson. Non-finite samples propagate into the result.
    ///
    /// ```
    /// # use mobius::MobiusStrip;
    /// # use mobius::float_types::TAU;
    /// // A thin strip is nearly a band of length 2πR.
    /// let strip = MobiusStrip::new(1.0, 0.01, 201).unwrap();
    /// assert!((strip.surface_area() - TAU * 0.01).abs() < 1e-4);
    /// ```
    pub fn surface_area(&self) -> Real {
        let density = self.area_density();
        let profile = simpson_along(&density, Axis::Rows, self.dv());
        let area = simpson(&profile, self.du());

        if area.is_finite() {
            log::trace!("surface area = {area}");
        } else {
            log::warn!("surface area evaluated to a non-finite value: {area}");
        }
        area
    }

    /// Boundary points at `v = -w/2` (row 0), ordered by increasing `u`.
    pub fn bottom_edge(&self) -> Vec<Point3<Real>> {
        self.row_points(0)
    }

    /// Boundary points at `v = +w/2` (last row), ordered by increasing `u`.
    pub fn top_edge(&self) -> Vec<Point3<Real>> {
        self.row_points(self.resolution() - 1)
    }

    /// The strip's single boundary curve as one closed polyline.
    ///
    /// Walks the top row and continues into the bottom row: the end of the
    /// top row at `u = 2π` coincides with the start of the bottom row at
    /// `u = 0`, and the end of the bottom row coincides with the start of the
    /// top row, so the first and last points are the same. The seam sample is
    /// not repeated.
    pub fn boundary_loop(&self) -> Vec<Point3<Real>> {
        let mut points = self.top_edge();
        points.extend(self.bottom_edge().into_iter().skip(1));
        points
    }

    /// Boundary length as the sum of the chord lengths of the bottom and top
    /// rows.
    ///
    /// The two rows are the two halves of the strip's single boundary, so
    /// this is the length of the whole boundary and matches
    /// `polyline_length(&boundary_loop())` up to rounding at the seam.
    pub fn edge_length(&self) -> Real {
        let length = polyline_length(&self.bottom_edge()) + polyline_length(&self.top_edge());

        if length.is_finite() {
            log::trace!("edge length = {length}");
        } else {
            log::warn!("edge length evaluated to a non-finite value: {length}");
        }
        length
    }

    /// Evaluate area and edge length together.
    ///
    /// With the `parallel` feature both run concurrently on the rayon pool.
    pub fn measure(&self) -> Measurements {
        #[cfg(feature = "parallel")]
        let (surface_area, edge_length) =
            rayon::join(|| self.surface_area(), || self.edge_length());
        #[cfg(not(feature = "parallel"))]
        let (surface_area, edge_length) = (self.surface_area(), self.edge_length());

        Measurements {
            surface_area,
            edge_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Real = 1e3 * Real::EPSILON;

    #[test]
    fn polyline_length_of_unit_steps() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
        ];
        assert!((polyline_length(&pts) - 3.0).abs() < TOL);
        assert_eq!(polyline_length(&pts[..1]), 0.0);
        assert_eq!(polyline_length(&[]), 0.0);
    }

    #[test]
    fn tangents_match_analytic_derivatives_in_the_interior() {
        let strip = MobiusStrip::new(1.0, 0.4, 101).unwrap();
        let t = strip.tangents();
        let (i, j) = (30, 40);
        let (u, v) = (strip.u()[j], strip.v()[i]);

        let c = (u / 2.0).cos();
        let s = (u / 2.0).sin();
        let r = 1.0 + v * c;
        let r_u = Vector3::new(
            -0.5 * v * s * u.cos() - r * u.sin(),
            -0.5 * v * s * u.sin() + r * u.cos(),
            0.5 * v * c,
        );
        let r_v = Vector3::new(c * u.cos(), c * u.sin(), s);

        assert!((t.along_u(i, j) - r_u).norm() < 5e-3);
        assert!((t.along_v(i, j) - r_v).norm() < 1e4 * Real::EPSILON);
    }

    #[test]
    fn normals_are_unit_length() {
        let strip = MobiusStrip::new(1.0, 0.4, 9).unwrap();
        let t = strip.tangents();
        for i in 0..9 {
            for j in 0..9 {
                assert!((t.normal_at(i, j).norm() - 1.0).abs() < TOL);
            }
        }
    }
}
