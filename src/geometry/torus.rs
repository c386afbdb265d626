use serde::{Deserialize, Serialize};

use crate::geometry::{Color, MeshData, Primitive, WHITE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    pub main_radius: f32,
    pub main_segments: u32,
    pub tube_radius: f32,
    pub tube_segments: u32,
    pub color: Color,
    pub center: [f32; 3],
}

impl Default for TorusParams {
    fn default() -> Self {
        TorusParams {
            main_radius: 1.5,
            main_segments: 6,
            tube_radius: 0.5,
            tube_segments: 6,
            color: WHITE,
            center: [0.0, 0.0, 0.0],
        }
    }
}

/// Wireframe torus lying in the XY plane.
///
/// Vertex `i * tube_segments + j` is tube point `j` of ring `i`. Every ring is a closed loop
/// and every tube point is joined to the same point on the next ring.
pub fn torus(params: &TorusParams) -> MeshData {
    let main = params.main_segments.max(3);
    let tube = params.tube_segments.max(3);
    let [cx, cy, cz] = params.center;

    let main_step = (360.0 / main as f32).to_radians();
    let tube_step = (360.0 / tube as f32).to_radians();

    let vertex_count = (main * tube) as usize;
    let mut mesh = MeshData::with_capacity(Primitive::Lines, vertex_count, vertex_count * 4);

    for i in 0..main {
        let main_angle = main_step * i as f32;
        let (sin_main, cos_main) = main_angle.sin_cos();

        for j in 0..tube {
            let tube_angle = tube_step * j as f32;
            let (sin_tube, cos_tube) = tube_angle.sin_cos();
            let ring = params.main_radius + params.tube_radius * cos_tube;

            mesh.push_vertex(
                [
                    ring * cos_main + cx,
                    ring * sin_main + cy,
                    params.tube_radius * sin_tube + cz,
                ],
                params.color,
            );
        }
    }

    for i in 0..main {
        let start = i * tube;
        for j in 0..tube {
            mesh.push_line(start + j, start + (j + 1) % tube);
        }
    }

    for i in 0..main {
        let next = (i + 1) % main;
        for j in 0..tube {
            mesh.push_line(i * tube + j, next * tube + j);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::{assert_indices_in_range, edges};

    #[test]
    fn default_torus_counts() {
        let mesh = torus(&TorusParams::default());
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.element_count(), 72);
        assert_indices_in_range(&mesh);

        let mut unique = edges(&mesh);
        unique.dedup();
        assert_eq!(unique.len(), 72);
    }

    #[test]
    fn points_lie_on_tube_surface() {
        let params = TorusParams {
            main_radius: 2.0,
            main_segments: 12,
            tube_radius: 0.25,
            tube_segments: 8,
            center: [1.0, 1.0, 1.0],
            ..TorusParams::default()
        };
        let mesh = torus(&params);

        for v in 0..mesh.vertex_count() {
            let [x, y, z] = mesh.position(v);
            let (x, y, z) = (x - 1.0, y - 1.0, z - 1.0);
            let radial = (x * x + y * y).sqrt() - 2.0;
            let distance = (radial * radial + z * z).sqrt();
            assert!((distance - 0.25).abs() < 1e-5);
        }
    }

    #[test]
    fn every_vertex_has_four_neighbours() {
        let mesh = torus(&TorusParams::default());
        let mut degree = vec![0; mesh.vertex_count()];
        for &i in &mesh.indices {
            degree[i as usize] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4));
    }
}
