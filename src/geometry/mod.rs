//! CPU-side mesh generation for the parametric solids.
//!
//! Every generator produces interleaved `position.xyz, color.rgb` vertices and an index list
//! drawn either as line pairs or as triangles.

use gl::types::GLenum;
use serde::{Deserialize, Serialize};

mod cone;
mod cube;
mod cylinder;
mod spiral;
mod torus;
mod trapezoid;

pub use cone::{cone, ConeParams};
pub use cube::{cube_triangles, cube_wireframe};
pub use cylinder::{cylinder, CylinderParams};
pub use spiral::{spiral, SpiralParams};
pub use torus::{torus, TorusParams};
pub use trapezoid::{trapezoid, TrapezoidParams};

pub const FLOATS_PER_VERTEX: usize = 6;

pub type Color = [f32; 3];

pub const WHITE: Color = [1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Lines,
    Triangles,
}

impl Primitive {
    pub fn gl_mode(self) -> GLenum {
        match self {
            Primitive::Lines => gl::LINES,
            Primitive::Triangles => gl::TRIANGLES,
        }
    }

    pub fn indices_per_element(self) -> usize {
        match self {
            Primitive::Lines => 2,
            Primitive::Triangles => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    pub primitive: Primitive,
}

impl MeshData {
    pub fn new(primitive: Primitive) -> Self {
        MeshData {
            vertices: Vec::new(),
            indices: Vec::new(),
            primitive,
        }
    }

    pub fn with_capacity(primitive: Primitive, vertices: usize, indices: usize) -> Self {
        MeshData {
            vertices: Vec::with_capacity(vertices * FLOATS_PER_VERTEX),
            indices: Vec::with_capacity(indices),
            primitive,
        }
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: [f32; 3], color: Color) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&position);
        self.vertices.extend_from_slice(&color);
        index
    }

    pub fn push_line(&mut self, a: u32, b: u32) {
        self.indices.push(a);
        self.indices.push(b);
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    pub fn element_count(&self) -> usize {
        self.indices.len() / self.primitive.indices_per_element()
    }

    pub fn position(&self, index: usize) -> [f32; 3] {
        let base = index * FLOATS_PER_VERTEX;
        [
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        ]
    }

    pub fn color(&self, index: usize) -> Color {
        let base = index * FLOATS_PER_VERTEX + 3;
        [
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        ]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::MeshData;

    pub fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    pub fn assert_indices_in_range(mesh: &MeshData) {
        let count = mesh.vertex_count() as u32;
        for &i in &mesh.indices {
            assert!(i < count, "index {} out of {} vertices", i, count);
        }
    }

    /// Sorted undirected edge list, for comparing line meshes independent of winding.
    pub fn edges(mesh: &MeshData) -> Vec<(u32, u32)> {
        let mut edges: Vec<(u32, u32)> = mesh
            .indices
            .chunks(2)
            .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
            .collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_vertex_returns_sequential_indices() {
        let mut mesh = MeshData::new(Primitive::Lines);
        assert_eq!(mesh.push_vertex([0.0, 0.0, 0.0], WHITE), 0);
        assert_eq!(mesh.push_vertex([1.0, 2.0, 3.0], [0.1, 0.2, 0.3]), 1);
        mesh.push_line(0, 1);

        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.element_count(), 1);
        assert_eq!(mesh.position(1), [1.0, 2.0, 3.0]);
        assert_eq!(mesh.color(1), [0.1, 0.2, 0.3]);
    }
}
