use gl::types::*;

use crate::graphics::index_buffer::IndexBuffer;
use crate::graphics::vertex_buffer::VertexBuffer;

pub struct VertexArray {
    id: GLuint,
    elements_count: GLuint,
    indices_count: usize,
}

impl VertexArray {
    pub fn new() -> VertexArray {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }

        VertexArray {
            id,
            elements_count: 0,
            indices_count: 0,
        }
    }

    /// Attribute locations continue from the previously added buffers.
    pub fn add_vertex_buffer(&mut self, vertex_buffer: &VertexBuffer) {
        self.bind();
        vertex_buffer.bind();
        self.elements_count = vertex_buffer.layout().build_bound_buffer(self.elements_count);
    }

    pub fn set_index_buffer(&mut self, index_buffer: &IndexBuffer) {
        self.bind();
        index_buffer.bind();
        self.indices_count = index_buffer.count();
    }

    pub fn indices_count(&self) -> usize {
        self.indices_count
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}
