//! Vertices handed to triangle consumers.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A triangle corner, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – unit normal; the strip is non-orientable, so normals
    ///   on either side of the `u = 0 / 2π` seam point in opposite directions.
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }
}
