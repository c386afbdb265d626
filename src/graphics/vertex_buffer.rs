use std::mem;

use gl::types::*;
use serde::{Deserialize, Serialize};

use crate::graphics::attribute::BufferLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Usage {
    Static,
    Dynamic,
    Stream,
}

impl Default for Usage {
    fn default() -> Self {
        Usage::Static
    }
}

impl From<Usage> for GLenum {
    fn from(usage: Usage) -> Self {
        match usage {
            Usage::Static => gl::STATIC_DRAW,
            Usage::Dynamic => gl::DYNAMIC_DRAW,
            Usage::Stream => gl::STREAM_DRAW,
        }
    }
}

pub struct VertexBuffer {
    id: GLuint,
    layout: BufferLayout,
}

impl VertexBuffer {
    /// Uploads `data` into a new array buffer. `T` must be plain data matching `layout`.
    pub fn new<T: Copy>(data: &[T], layout: BufferLayout, usage: Usage) -> VertexBuffer {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
            gl::BindBuffer(gl::ARRAY_BUFFER, id);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                mem::size_of_val(data) as GLsizeiptr,
                data.as_ptr().cast(),
                usage.into(),
            );
        }

        VertexBuffer { id, layout }
    }

    pub fn layout(&self) -> &BufferLayout {
        &self.layout
    }

    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}
