pub mod attribute;
pub mod camera;
pub mod common;
pub mod index_buffer;
pub mod light;
pub mod material;
pub mod shader_program;
pub mod texture;
pub mod vertex_array;
pub mod vertex_buffer;
pub mod window;

pub use attribute::{BufferElement, BufferLayout, ShaderDataType};
pub use camera::{Camera, CameraMovement};
pub use index_buffer::IndexBuffer;
pub use light::{Light, PointLight};
pub use material::Material;
pub use shader_program::ShaderProgram;
pub use texture::Texture;
pub use vertex_array::VertexArray;
pub use vertex_buffer::{Usage, VertexBuffer};
