use std::mem;

use gl::types::*;

use crate::graphics::vertex_buffer::Usage;

pub struct IndexBuffer {
    id: GLuint,
    count: usize,
}

impl IndexBuffer {
    pub fn new(indices: &[u32], usage: Usage) -> IndexBuffer {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                mem::size_of_val(indices) as GLsizeiptr,
                indices.as_ptr().cast(),
                usage.into(),
            );
        }

        IndexBuffer {
            id,
            count: indices.len(),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
        }
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
