use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, MeshData, Primitive, WHITE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    pub height: f32,
    pub radius: f32,
    pub center: [f32; 3],
    pub segments: u32,
    pub color: Color,
}

impl Default for ConeParams {
    fn default() -> Self {
        ConeParams {
            height: 1.0,
            radius: 0.5,
            center: [0.0, 0.0, 0.0],
            segments: 30,
            color: WHITE,
        }
    }
}

/// Wireframe cone: base center, `segments` ring points in the XY plane, and the apex
/// `height` above the center along +Z.
pub fn cone(params: &ConeParams) -> MeshData {
    let n = params.segments.max(3);
    let [cx, cy, cz] = params.center;
    let color = params.color;

    let mut mesh = MeshData::with_capacity(Primitive::Lines, n as usize + 2, n as usize * 6);

    let base = mesh.push_vertex([cx, cy, cz], color);
    for i in 0..n {
        let theta = 2.0 * PI * i as f32 / n as f32;
        let x = params.radius * theta.cos();
        let y = params.radius * theta.sin();
        mesh.push_vertex([x + cx, y + cy, cz], color);
    }
    let apex = mesh.push_vertex([cx, cy, cz + params.height], color);

    for i in 1..=n {
        mesh.push_line(base, i);
        mesh.push_line(apex, i);
    }

    for i in 1..n {
        mesh.push_line(i, i + 1);
    }
    mesh.push_line(n, 1);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_close, assert_indices_in_range};

    #[test]
    fn default_cone_layout() {
        let mesh = cone(&ConeParams::default());
        assert_eq!(mesh.vertex_count(), 32);
        assert_eq!(mesh.indices.len(), 30 * 6);
        assert_indices_in_range(&mesh);

        assert_close(mesh.position(0), [0.0, 0.0, 0.0]);
        assert_close(mesh.position(31), [0.0, 0.0, 1.0]);
        assert_close(mesh.position(1), [0.5, 0.0, 0.0]);
    }

    #[test]
    fn ring_closes_back_to_first_point() {
        let params = ConeParams {
            segments: 4,
            ..ConeParams::default()
        };
        let mesh = cone(&params);

        assert_eq!(&mesh.indices[..4], &[0, 1, 5, 1]);
        assert_eq!(&mesh.indices[16..], &[1, 2, 2, 3, 3, 4, 4, 1]);
    }

    #[test]
    fn ring_points_sit_on_radius_around_center() {
        let params = ConeParams {
            height: 2.0,
            radius: 1.5,
            center: [1.0, -2.0, 3.0],
            segments: 12,
            color: [0.2, 0.4, 0.6],
        };
        let mesh = cone(&params);

        for i in 1..=12 {
            let p = mesh.position(i);
            let r = ((p[0] - 1.0).powi(2) + (p[1] + 2.0).powi(2)).sqrt();
            assert!((r - 1.5).abs() < 1e-5);
            assert_eq!(p[2], 3.0);
            assert_eq!(mesh.color(i), [0.2, 0.4, 0.6]);
        }
        assert_close(mesh.position(13), [1.0, -2.0, 5.0]);
    }
}
