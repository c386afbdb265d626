use std::ffi::c_void;

use gl::types::*;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderDataType {
    Float,
    Float2,
    Float3,
    Float4,
    Int,
    Int2,
    Int3,
    Int4,
}

impl ShaderDataType {
    pub fn components_count(self) -> u32 {
        use ShaderDataType::*;

        match self {
            Float | Int => 1,
            Float2 | Int2 => 2,
            Float3 | Int3 => 3,
            Float4 | Int4 => 4,
        }
    }

    pub fn is_int(self) -> bool {
        use ShaderDataType::*;

        matches!(self, Int | Int2 | Int3 | Int4)
    }

    /// Size of one attribute of this type in bytes.
    pub fn size(self) -> usize {
        let component = if self.is_int() {
            std::mem::size_of::<GLint>()
        } else {
            std::mem::size_of::<GLfloat>()
        };
        component * self.components_count() as usize
    }

    pub fn component_type(self) -> GLenum {
        if self.is_int() {
            gl::INT
        } else {
            gl::FLOAT
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferElement {
    pub data_type: ShaderDataType,
    pub component_type: GLenum,
    pub components_count: u32,
    pub size: usize,
    pub offset: usize,
}

impl BufferElement {
    pub fn new(data_type: ShaderDataType) -> Self {
        BufferElement {
            data_type,
            component_type: data_type.component_type(),
            components_count: data_type.components_count(),
            size: data_type.size(),
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferLayout {
    elements: Vec<BufferElement>,
    stride: usize,
}

impl BufferLayout {
    pub fn new(types: Vec<ShaderDataType>) -> Self {
        let mut offset = 0;
        let elements = types
            .into_iter()
            .map(|data_type| {
                let mut element = BufferElement::new(data_type);
                element.offset = offset;
                offset += element.size;
                element
            })
            .collect();

        BufferLayout {
            elements,
            stride: offset,
        }
    }

    pub fn position_color() -> Self {
        BufferLayout::new(vec![ShaderDataType::Float3, ShaderDataType::Float3])
    }

    pub fn position_texcoord_normal() -> Self {
        BufferLayout::new(vec![
            ShaderDataType::Float3,
            ShaderDataType::Float2,
            ShaderDataType::Float3,
        ])
    }

    pub fn elements(&self) -> &[BufferElement] {
        &self.elements
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Describes this layout to the currently bound VAO and array buffer, starting at
    /// attribute `first_location`. Returns the next free attribute location.
    pub fn build_bound_buffer(&self, first_location: GLuint) -> GLuint {
        let mut location = first_location;

        unsafe {
            for element in &self.elements {
                gl::EnableVertexAttribArray(location);

                if element.data_type.is_int() {
                    gl::VertexAttribIPointer(
                        location,
                        element.components_count as GLint,
                        element.component_type,
                        self.stride as GLsizei,
                        element.offset as *const c_void,
                    );
                } else {
                    gl::VertexAttribPointer(
                        location,
                        element.components_count as GLint,
                        element.component_type,
                        gl::FALSE as GLboolean,
                        self.stride as GLsizei,
                        element.offset as *const c_void,
                    );
                }

                location += 1;
            }
        }

        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_sizes() {
        assert_eq!(ShaderDataType::Float.size(), 4);
        assert_eq!(ShaderDataType::Float3.size(), 12);
        assert_eq!(ShaderDataType::Int4.size(), 16);
        assert_eq!(ShaderDataType::Int2.component_type(), gl::INT);
        assert_eq!(ShaderDataType::Float2.component_type(), gl::FLOAT);
    }

    #[test]
    fn offsets_are_prefix_sums() {
        let layout = BufferLayout::position_texcoord_normal();
        let offsets: Vec<usize> = layout.elements().iter().map(|e| e.offset).collect();

        assert_eq!(offsets, vec![0, 12, 20]);
        assert_eq!(layout.stride(), 32);
    }

    #[test]
    fn position_color_matches_generated_vertices() {
        let layout = BufferLayout::position_color();
        assert_eq!(
            layout.stride(),
            crate::geometry::FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn mixed_layout_keeps_component_types() {
        let layout = BufferLayout::new(vec![ShaderDataType::Float4, ShaderDataType::Int]);
        let elements = layout.elements();

        assert_eq!(elements[0].components_count, 4);
        assert_eq!(elements[1].component_type, gl::INT);
        assert_eq!(elements[1].offset, 16);
        assert_eq!(layout.stride(), 20);
    }
}
