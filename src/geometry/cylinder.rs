use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, MeshData, Primitive, WHITE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub height: f32,
    pub radius: f32,
    pub center: [f32; 3],
    pub segments: u32,
    pub color: Color,
}

impl Default for CylinderParams {
    fn default() -> Self {
        CylinderParams {
            height: 1.0,
            radius: 0.5,
            center: [0.0, 0.0, 0.0],
            segments: 30,
            color: WHITE,
        }
    }
}

/// Wireframe cylinder along +Z.
///
/// Vertex order: bottom center, then `(bottom_i, top_i)` pairs for every segment, then top
/// center. Each segment contributes a spoke to both centers, a vertical edge and the two
/// ring edges to the next segment.
pub fn cylinder(params: &CylinderParams) -> MeshData {
    let n = params.segments.max(3);
    let [cx, cy, cz] = params.center;
    let color = params.color;

    let mut mesh = MeshData::with_capacity(Primitive::Lines, 2 * n as usize + 2, 10 * n as usize);

    let bottom_center = mesh.push_vertex([cx, cy, cz], color);
    for i in 0..n {
        let theta = 2.0 * PI * i as f32 / n as f32;
        let x = params.radius * theta.cos() + cx;
        let y = params.radius * theta.sin() + cy;
        mesh.push_vertex([x, y, cz], color);
        mesh.push_vertex([x, y, cz + params.height], color);
    }
    let top_center = mesh.push_vertex([cx, cy, cz + params.height], color);

    for i in 0..n {
        let bottom = 1 + 2 * i;
        mesh.push_line(bottom_center, bottom);
        mesh.push_line(bottom, bottom + 1);
        mesh.push_line(bottom + 1, top_center);
    }

    for i in 0..n {
        let bottom = 1 + 2 * i;
        let next_bottom = if i + 1 == n { 1 } else { bottom + 2 };
        mesh.push_line(bottom, next_bottom);
        mesh.push_line(bottom + 1, next_bottom + 1);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_close, assert_indices_in_range, edges};

    #[test]
    fn default_cylinder_counts() {
        let mesh = cylinder(&CylinderParams::default());
        assert_eq!(mesh.vertex_count(), 62);
        assert_eq!(mesh.indices.len(), 300);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn rings_wrap_to_first_segment() {
        let params = CylinderParams {
            segments: 3,
            ..CylinderParams::default()
        };
        let mesh = cylinder(&params);

        // vertices: 0 | 1,2 | 3,4 | 5,6 | 7
        assert_eq!(&mesh.indices[18..], &[1, 3, 2, 4, 3, 5, 4, 6, 5, 1, 6, 2]);

        let mut unique = edges(&mesh);
        unique.dedup();
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn top_ring_is_offset_by_height() {
        let params = CylinderParams {
            height: 3.0,
            center: [0.0, 1.0, -1.0],
            segments: 8,
            ..CylinderParams::default()
        };
        let mesh = cylinder(&params);

        for i in 0..8 {
            let bottom = mesh.position(1 + 2 * i);
            let top = mesh.position(2 + 2 * i);
            assert_close([bottom[0], bottom[1], bottom[2] + 3.0], top);
            assert_eq!(bottom[2], -1.0);
        }
        assert_close(mesh.position(17), [0.0, 1.0, 2.0]);
    }
}
