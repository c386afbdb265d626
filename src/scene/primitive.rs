use gl::types::GLint;
use nalgebra_glm as glm;

use crate::core::engine_options::ShapeKind;
use crate::core::error::EngineError;
use crate::geometry::{
    cone, cube_triangles, cube_wireframe, cylinder, spiral, torus, trapezoid, ConeParams,
    CylinderParams, MeshData, SpiralParams, TorusParams, TrapezoidParams,
};
use crate::graphics::camera::Camera;
use crate::graphics::shader_program::ShaderProgram;
use crate::scene::transform::Transform;
use crate::scene::{GpuMesh, Shape};

/// `transform` followed by a spin of `angle_deg` about `axis`. A zero axis means no spin.
pub fn spun_matrix(transform: &glm::Mat4, axis: &glm::Vec3, angle_deg: f32) -> glm::Mat4 {
    if axis.norm() == 0.0 {
        return *transform;
    }

    transform * glm::rotation(angle_deg.to_radians(), &glm::normalize(axis))
}

/// A generated mesh drawn with the per-vertex colour shader.
pub struct PrimitiveShape {
    mesh: GpuMesh,
    program: ShaderProgram,
    transform: Transform,
    model_location: GLint,
    spin_axis: glm::Vec3,
    spin_angle: f32,
}

impl PrimitiveShape {
    pub fn from_mesh(mesh: &MeshData) -> Result<PrimitiveShape, EngineError> {
        let program = ShaderProgram::color()?;
        let model_location = program.uniform_location("model_matrix");

        log::debug!(
            "uploading {:?} mesh with {} vertices",
            mesh.primitive,
            mesh.vertex_count()
        );

        Ok(PrimitiveShape {
            mesh: GpuMesh::from_mesh(mesh)?,
            program,
            transform: Transform::new(),
            model_location,
            spin_axis: glm::vec3(0.0, 1.0, 0.0),
            spin_angle: 0.0,
        })
    }

    pub fn cube() -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&cube_wireframe())
    }

    pub fn triangle_cube() -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&cube_triangles())
    }

    pub fn cone(params: &ConeParams) -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&cone(params))
    }

    pub fn cylinder(params: &CylinderParams) -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&cylinder(params))
    }

    pub fn torus(params: &TorusParams) -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&torus(params))
    }

    pub fn trapezoid(params: &TrapezoidParams) -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&trapezoid(params))
    }

    pub fn spiral(params: &SpiralParams) -> Result<PrimitiveShape, EngineError> {
        Self::from_mesh(&spiral(params))
    }

    pub fn from_kind(kind: &ShapeKind) -> Result<PrimitiveShape, EngineError> {
        match kind {
            ShapeKind::Cube => Self::cube(),
            ShapeKind::TriangleCube => Self::triangle_cube(),
            ShapeKind::Cone(params) => Self::cone(params),
            ShapeKind::Cylinder(params) => Self::cylinder(params),
            ShapeKind::Torus(params) => Self::torus(params),
            ShapeKind::Trapezoid(params) => Self::trapezoid(params),
            ShapeKind::Spiral(params) => Self::spiral(params),
        }
    }

    /// Adds `angle_deg` to the spin about `axis`.
    pub fn rotate(&mut self, axis: glm::Vec3, angle_deg: f32) {
        self.spin_axis = axis;
        self.spin_angle = (self.spin_angle + angle_deg) % 360.0;
    }

    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    pub fn update_camera(&self, camera: &Camera, view_name: &str) {
        self.program.bind();
        camera.set_matrix(&self.program, view_name);
    }
}

impl Shape for PrimitiveShape {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn render(&self) {
        self.program.bind();

        let model = spun_matrix(self.transform.model_matrix(), &self.spin_axis, self.spin_angle);
        self.program.set_mat4(self.model_location, &model);

        self.mesh.draw();
    }

    fn shader_program(&self) -> &ShaderProgram {
        &self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_axis_keeps_transform() {
        let transform = glm::translation(&glm::vec3(1.0, 2.0, 3.0));
        assert_eq!(spun_matrix(&transform, &glm::vec3(0.0, 0.0, 0.0), 45.0), transform);
    }

    #[test]
    fn spin_applies_in_object_space() {
        let transform = glm::translation(&glm::vec3(5.0, 0.0, 0.0));
        let matrix = spun_matrix(&transform, &glm::vec3(0.0, 0.0, 2.0), 90.0);
        let p = matrix * glm::vec4(1.0, 0.0, 0.0, 1.0);

        // spun to (0,1,0) first, then moved
        assert!((glm::vec3(p.x, p.y, p.z) - glm::vec3(5.0, 1.0, 0.0)).norm() < 1e-5);
    }
}
