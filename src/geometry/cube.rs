use crate::geometry::{Color, MeshData, Primitive, WHITE};

const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

#[rustfmt::skip]
const EDGES: [u32; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // front
    4, 5, 5, 6, 6, 7, 7, 4, // back
    0, 4, 1, 5, 2, 6, 3, 7,
];

/// Unit-ish cube spanning [-1, 1] on every axis, drawn as 12 white edges.
pub fn cube_wireframe() -> MeshData {
    let mut mesh = MeshData::with_capacity(Primitive::Lines, CORNERS.len(), EDGES.len());
    for corner in CORNERS {
        mesh.push_vertex(corner, WHITE);
    }
    mesh.indices.extend_from_slice(&EDGES);
    mesh
}

const SOLID_CORNERS: [([f32; 3], Color); 8] = [
    ([1.0, -1.0, 1.0], [1.0, 0.0, 0.0]),
    ([1.0, -1.0, -1.0], [0.0, 1.0, 0.0]),
    ([1.0, 1.0, -1.0], [0.0, 0.0, 1.0]),
    ([1.0, 1.0, 1.0], [0.0, 1.0, 1.0]),
    ([-1.0, -1.0, 1.0], [1.0, 0.0, 1.0]),
    ([-1.0, -1.0, -1.0], [1.0, 1.0, 0.0]),
    ([-1.0, 1.0, -1.0], [0.5, 0.7, 0.9]),
    ([-1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
];

#[rustfmt::skip]
const FACES: [u32; 36] = [
    4, 0, 3,  4, 3, 7, // front
    0, 1, 2,  0, 2, 3, // right
    1, 5, 6,  1, 6, 2, // back
    5, 4, 7,  5, 7, 6, // left
    7, 3, 2,  7, 2, 6, // top
    0, 5, 1,  0, 4, 5, // bottom
];

/// Solid cube with a distinct color per corner.
pub fn cube_triangles() -> MeshData {
    let mut mesh = MeshData::with_capacity(Primitive::Triangles, SOLID_CORNERS.len(), FACES.len());
    for (position, color) in SOLID_CORNERS {
        mesh.push_vertex(position, color);
    }
    mesh.indices.extend_from_slice(&FACES);
    mesh
}
