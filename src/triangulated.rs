//! Triangle view of a sampled surface, for renderers and exporters.
use crate::surface::MobiusStrip;
use crate::vertex::Vertex;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);

    /// Number of triangles [`visit_triangles`](Self::visit_triangles) yields.
    fn triangle_count(&self) -> usize {
        let mut count = 0;
        self.visit_triangles(|_| count += 1);
        count
    }
}

impl Triangulated3D for MobiusStrip {
    /// Splits every grid cell `(i, j)–(i+1, j+1)` into two triangles.
    /// Normals come from the finite-difference tangents at each sample.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let n = self.resolution();
        let tangents = self.tangents();
        let vertex = |i: usize, j: usize| Vertex::new(self.point(i, j), tangents.normal_at(i, j));

        for i in 0..n - 1 {
            for j in 0..n - 1 {
                let a = vertex(i, j);
                let b = vertex(i, j + 1);
                let c = vertex(i + 1, j + 1);
                let d = vertex(i + 1, j);
                f([a, b, c]);
                f([a, c, d]);
            }
        }
    }

    fn triangle_count(&self) -> usize {
        let cells = self.resolution() - 1;
        2 * cells * cells
    }
}
