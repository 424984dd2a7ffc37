//! Serial implementation of surface sampling

use crate::float_types::Real;
use crate::grid::Grid;
use crate::surface::traits::{SamplerOps, split_coordinates};
use nalgebra::Point3;

/// Serial implementation of `SamplerOps`.
pub struct SerialSampler;

impl SerialSampler {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplerOps for SerialSampler {
    fn sample<F>(&self, u: &[Real], v: &[Real], surface: F) -> [Grid; 3]
    where
        F: Fn(Real, Real) -> Point3<Real> + Sync + Send,
    {
        let points: Vec<Point3<Real>> = v
            .iter()
            .flat_map(|&vi| u.iter().map(move |&uj| (uj, vi)))
            .map(|(uj, vi)| surface(uj, vi))
            .collect();

        split_coordinates(v.len(), u.len(), &points)
    }
}
