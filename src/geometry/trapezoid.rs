use serde::{Deserialize, Serialize};

use crate::geometry::{Color, MeshData, Primitive, WHITE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapezoidParams {
    pub height: f32,
    pub up_length: f32,
    pub down_length: f32,
    pub color: Color,
    pub center: [f32; 3],
}

impl Default for TrapezoidParams {
    fn default() -> Self {
        TrapezoidParams {
            height: 1.0,
            up_length: 0.5,
            down_length: 1.0,
            color: WHITE,
            center: [0.0, 0.0, 0.0],
        }
    }
}

#[rustfmt::skip]
const EDGES: [u32; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // bottom
    4, 5, 5, 6, 6, 7, 7, 4, // top
    0, 4, 1, 5, 2, 6, 3, 7,
];

const SQUARE: [[f32; 2]; 4] = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];

/// Square frustum: a `down_length` square at the center and an `up_length` square `height`
/// above it along +Z.
pub fn trapezoid(params: &TrapezoidParams) -> MeshData {
    let [cx, cy, cz] = params.center;
    let mut mesh = MeshData::with_capacity(Primitive::Lines, 8, EDGES.len());

    for (side, z) in [(params.down_length, cz), (params.up_length, cz + params.height)] {
        for [sx, sy] in SQUARE {
            mesh.push_vertex([cx + sx * side, cy + sy * side, z], params.color);
        }
    }
    mesh.indices.extend_from_slice(&EDGES);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_close, assert_indices_in_range};

    #[test]
    fn frustum_has_eight_corners_and_twelve_edges() {
        let mesh = trapezoid(&TrapezoidParams::default());
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.element_count(), 12);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn squares_use_their_own_side_lengths() {
        let params = TrapezoidParams {
            height: 2.0,
            up_length: 1.0,
            down_length: 4.0,
            center: [0.0, 0.0, 1.0],
            ..TrapezoidParams::default()
        };
        let mesh = trapezoid(&params);

        assert_close(mesh.position(0), [-2.0, -2.0, 1.0]);
        assert_close(mesh.position(2), [2.0, 2.0, 1.0]);
        assert_close(mesh.position(4), [-0.5, -0.5, 3.0]);
        assert_close(mesh.position(6), [0.5, 0.5, 3.0]);
    }
}
