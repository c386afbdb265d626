use std::path::Path;

use gl::types::GLint;

use crate::core::error::EngineError;
use crate::geometry::{Primitive, FLOATS_PER_VERTEX};
use crate::graphics::attribute::BufferLayout;
use crate::graphics::material::Material;
use crate::graphics::shader_program::ShaderProgram;
use crate::graphics::texture::Texture;
use crate::loaders::{load_obj, load_stl, StlMesh};
use crate::scene::transform::Transform;
use crate::scene::{GpuMesh, Shape};

const DIFFUSE_SLOT: u32 = 0;

/// Interleaves STL positions with a grey ramp colour taken from each vertex's float offset.
pub fn stl_vertices(mesh: &StlMesh) -> Vec<f32> {
    let step = if mesh.coords.is_empty() {
        0.0
    } else {
        1.0 / mesh.coords.len() as f32
    };

    let mut vertices = Vec::with_capacity(mesh.vertex_count() * FLOATS_PER_VERTEX);
    for (v, position) in mesh.coords.chunks_exact(3).enumerate() {
        let grey = (3 * v) as f32 * step;
        vertices.extend_from_slice(position);
        vertices.extend_from_slice(&[grey, grey, grey]);
    }

    vertices
}

/// A mesh loaded from disk. OBJ models are lit and textured, STL models use vertex colours.
pub struct Model {
    mesh: GpuMesh,
    program: ShaderProgram,
    transform: Transform,
    model_location: GLint,
    material: Option<Material>,
    texture: Option<Texture>,
}

impl Model {
    pub fn from_obj<P: AsRef<Path>, T: AsRef<Path>>(
        path: P,
        texture_path: T,
    ) -> Result<Model, EngineError> {
        let vertices = load_obj(path)?;
        let program = ShaderProgram::lit()?;
        let texture = Texture::load(texture_path, DIFFUSE_SLOT)?;

        let mesh = GpuMesh::new(
            &vertices,
            vertices.len(),
            BufferLayout::position_texcoord_normal(),
            None,
            Primitive::Triangles,
        )?;

        program.bind();
        program.set_i32(program.uniform_location("tex0"), DIFFUSE_SLOT as i32);

        let mut material = Material::default();
        material.init_shader(&program);

        Ok(Model {
            mesh,
            model_location: program.uniform_location("model_matrix"),
            program,
            transform: Transform::new(),
            material: Some(material),
            texture: Some(texture),
        })
    }

    pub fn from_stl<P: AsRef<Path>>(path: P) -> Result<Model, EngineError> {
        let stl = load_stl(path)?;
        let program = ShaderProgram::color()?;

        let vertices = stl_vertices(&stl);
        let mesh = GpuMesh::new(
            &vertices,
            stl.vertex_count(),
            BufferLayout::position_color(),
            Some(stl.tris.as_slice()),
            Primitive::Triangles,
        )?;

        Ok(Model {
            mesh,
            model_location: program.uniform_location("model_matrix"),
            program,
            transform: Transform::new(),
            material: None,
            texture: None,
        })
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Only meaningful for lit models; STL models ignore materials.
    pub fn set_material(&mut self, mut material: Material) {
        if self.material.is_none() {
            log::warn!("material set on an unlit model is ignored");
            return;
        }

        material.init_shader(&self.program);
        self.material = Some(material);
    }
}

impl Shape for Model {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn render(&self) {
        self.program.bind();

        if let Some(material) = &self.material {
            material.update_shader(&self.program);
        }
        self.program
            .set_mat4(self.model_location, self.transform.model_matrix());

        if let Some(texture) = &self.texture {
            texture.bind();
        }

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
    fn stl_vertices_interleave_grey_ramp() {
        let mesh = StlMesh {
            coords: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            normals: vec![0.0, 0.0, 1.0],
            tris: vec![0, 1, 2],
            solids: vec![0, 1],
        };
        let vertices = stl_vertices(&mesh);

        assert_eq!(vertices.len(), 3 * FLOATS_PER_VERTEX);
        assert_eq!(&vertices[6..9], &[1.0, 0.0, 0.0]);

        let step = 1.0 / 9.0;
        assert_eq!(&vertices[3..6], &[0.0, 0.0, 0.0]);
        assert_eq!(&vertices[9..12], &[3.0 * step; 3]);
        assert_eq!(&vertices[15..18], &[6.0 * step; 3]);

        for colour in vertices.chunks_exact(FLOATS_PER_VERTEX).map(|v| &v[3..]) {
            assert!(colour.iter().all(|&c| c == colour[0]));
        }
    }

    #[test]
    fn empty_stl_gives_no_vertices() {
        assert!(stl_vertices(&StlMesh::default()).is_empty());
    }
}
