use serde::{Deserialize, Serialize};

use crate::geometry::{MeshData, Primitive};

const CENTER_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    pub center: [f32; 3],
    pub radius: f32,
    pub points: u32,
    /// Angle advanced per point, in degrees.
    pub angle_step: f32,
    /// Height gained per point along +Y.
    pub rise_step: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        SpiralParams {
            center: [0.0, 0.0, 0.0],
            radius: 1.0,
            points: 360 * 6,
            angle_step: 2.0,
            rise_step: 1.0 / 360.0,
        }
    }
}

/// Helix around +Y, colored by its own coordinates. Vertex 0 is the center; the helix
/// points follow as a single line strip expressed with line pairs.
pub fn spiral(params: &SpiralParams) -> MeshData {
    let [cx, cy, cz] = params.center;
    let points = params.points.max(2);

    let mut mesh = MeshData::with_capacity(
        Primitive::Lines,
        points as usize + 1,
        2 * (points as usize - 1),
    );
    mesh.push_vertex([cx, cy, cz], CENTER_COLOR);

    let mut height = 0.0f32;
    for i in 0..points {
        let angle = (params.angle_step * i as f32).to_radians();
        let (y, x) = angle.sin_cos();
        mesh.push_vertex(
            [
                cx + params.radius * x,
                cy + height,
                cz + params.radius * y,
            ],
            [0.5 + x, 0.5 + y, 0.5 + height],
        );
        height = params.rise_step * i as f32;
    }

    for i in 0..points - 1 {
        mesh.push_line(i + 1, i + 2);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_close, assert_indices_in_range};

    #[test]
    fn default_spiral_is_six_units_long() {
        let mesh = spiral(&SpiralParams::default());
        assert_eq!(mesh.vertex_count(), 2161);
        assert_eq!(mesh.indices.len(), 2 * 2159);
        assert_indices_in_range(&mesh);

        let last = mesh.position(2160);
        assert!((last[1] - 2158.0 / 360.0).abs() < 1e-4);
    }

    #[test]
    fn center_is_not_connected() {
        let mesh = spiral(&SpiralParams::default());
        assert!(!mesh.indices.contains(&0));
        assert_eq!(mesh.color(0), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn first_points_start_flat() {
        let params = SpiralParams {
            center: [1.0, 2.0, 3.0],
            ..SpiralParams::default()
        };
        let mesh = spiral(&params);

        assert_close(mesh.position(1), [2.0, 2.0, 3.0]);
        assert_eq!(mesh.position(2)[1], 2.0);
        assert!(mesh.position(3)[1] > 2.0);
    }
}
