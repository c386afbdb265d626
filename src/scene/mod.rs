use std::ptr;

use gl::types::*;
use nalgebra_glm as glm;

use crate::core::error::GlError;
use crate::geometry::{MeshData, Primitive};
use crate::graphics::common::gl_error_check;
use crate::graphics::attribute::BufferLayout;
use crate::graphics::index_buffer::IndexBuffer;
use crate::graphics::shader_program::ShaderProgram;
use crate::graphics::vertex_array::VertexArray;
use crate::graphics::vertex_buffer::{Usage, VertexBuffer};

pub mod complex_model;
pub mod model;
pub mod primitive;
pub mod scene;
pub mod transform;

pub use complex_model::{ComplexModel, ModelData};
pub use model::Model;
pub use primitive::PrimitiveShape;
pub use transform::Transform;

/// Something with a transform that draws itself with its own shader program.
pub trait Shape {
    fn transform(&self) -> &Transform;
    fn transform_mut(&mut self) -> &mut Transform;
    fn render(&self);
    fn shader_program(&self) -> &ShaderProgram;

    fn scale(&self) -> glm::Vec3 {
        self.transform().scale()
    }

    fn location(&self) -> glm::Vec3 {
        self.transform().location()
    }

    fn rotation(&self) -> glm::Vec3 {
        self.transform().rotation()
    }

    fn set_scale(&mut self, scale: glm::Vec3) {
        self.transform_mut().set_scale(scale);
    }

    fn set_location(&mut self, location: glm::Vec3) {
        self.transform_mut().set_location(location);
    }

    fn set_rotation(&mut self, rotation: glm::Vec3) {
        self.transform_mut().set_rotation(rotation);
    }
}

/// Uploaded geometry: a VAO with its vertex buffer and optional index buffer.
pub struct GpuMesh {
    vertex_array: VertexArray,
    _vertex_buffer: VertexBuffer,
    index_buffer: Option<IndexBuffer>,
    primitive: Primitive,
    vertex_count: usize,
}

impl GpuMesh {
    pub fn new<T: Copy>(
        vertices: &[T],
        vertex_count: usize,
        layout: BufferLayout,
        indices: Option<&[u32]>,
        primitive: Primitive,
    ) -> Result<GpuMesh, GlError> {
        let mut vertex_array = VertexArray::new();
        let vertex_buffer = VertexBuffer::new(vertices, layout, Usage::Static);
        vertex_array.add_vertex_buffer(&vertex_buffer);

        let index_buffer = indices.map(|indices| {
            let index_buffer = IndexBuffer::new(indices, Usage::Static);
            vertex_array.set_index_buffer(&index_buffer);
            index_buffer
        });

        VertexArray::unbind();
        gl_error_check()?;

        Ok(GpuMesh {
            vertex_array,
            _vertex_buffer: vertex_buffer,
            index_buffer,
            primitive,
            vertex_count,
        })
    }

    pub fn from_mesh(mesh: &MeshData) -> Result<GpuMesh, GlError> {
        GpuMesh::new(
            &mesh.vertices,
            mesh.vertex_count(),
            BufferLayout::position_color(),
            Some(mesh.indices.as_slice()),
            mesh.primitive,
        )
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn draw(&self) {
        self.vertex_array.bind();

        unsafe {
            match &self.index_buffer {
                Some(_) => gl::DrawElements(
                    self.primitive.gl_mode(),
                    self.vertex_array.indices_count() as GLsizei,
                    gl::UNSIGNED_INT,
                    ptr::null(),
                ),
                None => gl::DrawArrays(
                    self.primitive.gl_mode(),
                    0,
                    self.vertex_count as GLsizei,
                ),
            }
        }
    }
}
