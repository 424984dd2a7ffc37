//! Sampled Möbius strip surface
//!
//! The strip is the ruled surface
//! ```text
//! x(u, v) = (R + v·cos(u/2))·cos(u)
//! y(u, v) = (R + v·cos(u/2))·sin(u)
//! z(u, v) = v·sin(u/2)
//! ```
//! for `u ∈ [0, 2π]`, `v ∈ [-w/2, w/2]`, sampled once on an `n × n` grid.
//! Row `i` of every coordinate grid holds `v[i]`, column `j` holds `u[j]`.
//!
//! Sampling is delegated to a [`SamplerOps`] implementation: serial by
//! default, rayon-backed with the `parallel` feature.

pub mod measure;
pub mod params;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use measure::{Measurements, Tangents, polyline_length};
pub use params::StripParameters;
pub use traits::SamplerOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSampler;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSampler;

use crate::errors::MobiusError;
use crate::float_types::{Real, TAU};
use crate::grid::{Grid, linspace};
use nalgebra::Point3;

/// Evaluate the Möbius parametrization with centre radius `radius` at `(u, v)`.
#[inline]
pub fn mobius_point(radius: Real, u: Real, v: Real) -> Point3<Real> {
    let half = u * 0.5;
    let r = radius + v * half.cos();
    Point3::new(r * u.cos(), r * u.sin(), v * half.sin())
}

/// A Möbius strip sampled on an `n × n` parameter grid.
///
/// All grids are filled by the constructor and never change afterwards, so
/// every query is a pure function of the stored samples.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParameters,
    u: Vec<Real>,
    v: Vec<Real>,
    x: Grid,
    y: Grid,
    z: Grid,
}

impl MobiusStrip {
    /// Sample a strip of centre radius `radius`, width `width` and
    /// `resolution` samples per axis.
    ///
    /// # Errors
    /// [`MobiusError::InvalidParameter`] if `radius` or `width` is not a
    /// positive finite number, or `resolution < 2`.
    ///
    /// ```
    /// # use mobius::MobiusStrip;
    /// let strip = MobiusStrip::new(1.0, 0.4, 64).unwrap();
    /// assert!(strip.surface_area() > 0.0);
    /// assert!(MobiusStrip::new(1.0, 0.4, 1).is_err());
    /// ```
    pub fn new(radius: Real, width: Real, resolution: usize) -> Result<Self, MobiusError> {
        Self::from_parameters(StripParameters::new(radius, width, resolution))
    }

    /// Sample a strip from an already assembled [`StripParameters`].
    pub fn from_parameters(params: StripParameters) -> Result<Self, MobiusError> {
        params.validate()?;

        #[cfg(not(feature = "parallel"))]
        let ops = SerialSampler::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelSampler::new();

        Ok(Self::sample_with(&ops, params))
    }

    /// Sample with an explicit sampler. `params` must already be valid.
    fn sample_with<O: SamplerOps>(ops: &O, params: StripParameters) -> Self {
        let n = params.resolution;
        let half_width = 0.5 * params.width;
        let u = linspace(0.0, TAU, n);
        let v = linspace(-half_width, half_width, n);

        let radius = params.radius;
        let [x, y, z] = ops.sample(&u, &v, |uj, vi| mobius_point(radius, uj, vi));

        log::debug!(
            "sampled Möbius strip R={} w={} on a {n}x{n} grid",
            params.radius,
            params.width
        );

        MobiusStrip {
            params,
            u,
            v,
            x,
            y,
            z,
        }
    }

    #[inline]
    pub const fn parameters(&self) -> StripParameters {
        self.params
    }

    #[inline]
    pub const fn radius(&self) -> Real {
        self.params.radius
    }

    #[inline]
    pub const fn width(&self) -> Real {
        self.params.width
    }

    /// Samples per parameter axis.
    #[inline]
    pub const fn resolution(&self) -> usize {
        self.params.resolution
    }

    /// The `u` samples, evenly spaced over `[0, 2π]`.
    pub fn u(&self) -> &[Real] {
        &self.u
    }

    /// The `v` samples, evenly spaced over `[-w/2, w/2]`.
    pub fn v(&self) -> &[Real] {
        &self.v
    }

    /// Step between neighbouring `u` samples.
    #[inline]
    pub fn du(&self) -> Real {
        TAU / (self.resolution() - 1) as Real
    }

    /// Step between neighbouring `v` samples.
    #[inline]
    pub fn dv(&self) -> Real {
        self.width() / (self.resolution() - 1) as Real
    }

    pub const fn x(&self) -> &Grid {
        &self.x
    }

    pub const fn y(&self) -> &Grid {
        &self.y
    }

    pub const fn z(&self) -> &Grid {
        &self.z
    }

    /// Sampled point at row `i` (the `v` index) and column `j` (the `u` index).
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> Point3<Real> {
        Point3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    /// All points of row `i`, ordered by increasing `u`.
    pub fn row_points(&self, i: usize) -> Vec<Point3<Real>> {
        (0..self.resolution()).map(|j| self.point(i, j)).collect()
    }
}
