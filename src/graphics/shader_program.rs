use std::ffi::CString;
use std::ptr;

use gl::types::*;
use nalgebra_glm as glm;

use crate::core::error::{ShaderError, ShaderStage};

pub const COLOR_VERTEX: &str = include_str!("shaders/color_vertex.glsl");
pub const COLOR_FRAGMENT: &str = include_str!("shaders/color_fragment.glsl");
pub const LIT_VERTEX: &str = include_str!("shaders/lit_vertex.glsl");
pub const LIT_FRAGMENT: &str = include_str!("shaders/lit_fragment.glsl");

impl From<ShaderStage> for GLenum {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

fn read_info_log(id: GLuint, is_program: bool) -> String {
    unsafe {
        let mut len: GLint = 0;
        if is_program {
            gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
        } else {
            gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        }

        if len <= 1 {
            return String::new();
        }

        let mut buf: Vec<u8> = vec![0; len as usize];
        if is_program {
            gl::GetProgramInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        } else {
            gl::GetShaderInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
        }

        // drop the trailing nul
        buf.truncate(len as usize - 1);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn compile_shader(src: &str, stage: ShaderStage) -> Result<GLuint, ShaderError> {
    let source = CString::new(src).map_err(|_| ShaderError::InvalidSource(stage))?;

    unsafe {
        let shader = gl::CreateShader(stage.into());
        gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut status = GLint::from(gl::FALSE);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

        if status != GLint::from(gl::TRUE) {
            let log = read_info_log(shader, false);
            gl::DeleteShader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}

fn link_program(vertex: &str, fragment: &str) -> Result<GLuint, ShaderError> {
    let vs = compile_shader(vertex, ShaderStage::Vertex)?;
    let fs = match compile_shader(fragment, ShaderStage::Fragment) {
        Ok(fs) => fs,
        Err(e) => {
            unsafe { gl::DeleteShader(vs) };
            return Err(e);
        }
    };

    unsafe {
        let program = gl::CreateProgram();
        gl::AttachShader(program, vs);
        gl::AttachShader(program, fs);
        gl::LinkProgram(program);

        let mut status = GLint::from(gl::FALSE);
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);

        gl::DetachShader(program, fs);
        gl::DeleteShader(fs);
        gl::DetachShader(program, vs);
        gl::DeleteShader(vs);

        if status != GLint::from(gl::TRUE) {
            let log = read_info_log(program, true);
            gl::DeleteProgram(program);
            return Err(ShaderError::Link(log));
        }

        Ok(program)
    }
}

/// A linked vertex + fragment program. Uniform setters expect the program to be bound.
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    pub fn new(vertex: &str, fragment: &str) -> Result<ShaderProgram, ShaderError> {
        let id = link_program(vertex, fragment).map_err(|e| {
            log::error!("{}", e);
            e
        })?;

        log::debug!("linked shader program {}", id);
        Ok(ShaderProgram { id })
    }

    pub fn color() -> Result<ShaderProgram, ShaderError> {
        ShaderProgram::new(COLOR_VERTEX, COLOR_FRAGMENT)
    }

    pub fn lit() -> Result<ShaderProgram, ShaderError> {
        ShaderProgram::new(LIT_VERTEX, LIT_FRAGMENT)
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    pub fn unbind() {
        unsafe {
            gl::UseProgram(0);
        }
    }

    /// Returns -1 for names the program does not use, which GL silently ignores on upload.
    pub fn uniform_location(&self, name: &str) -> GLint {
        match CString::new(name) {
            Ok(name) => unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) },
            Err(_) => -1,
        }
    }

    pub fn set_mat4(&self, location: GLint, value: &glm::Mat4) {
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, glm::value_ptr(value).as_ptr());
        }
    }

    pub fn set_vec3(&self, location: GLint, value: &glm::Vec3) {
        unsafe {
            gl::Uniform3f(location, value.x, value.y, value.z);
        }
    }

    pub fn set_f32(&self, location: GLint, value: f32) {
        unsafe {
            gl::Uniform1f(location, value);
        }
    }

    pub fn set_i32(&self, location: GLint, value: i32) {
        unsafe {
            gl::Uniform1i(location, value);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_shaders_declare_expected_uniforms() {
        for src in [COLOR_VERTEX, LIT_VERTEX] {
            assert!(src.contains("uniform mat4 view_matrix"));
            assert!(src.contains("uniform mat4 model_matrix"));
        }

        for name in ["Material material", "PointLight pointLight", "vec3 cameraPos"] {
            assert!(LIT_FRAGMENT.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn shader_stages_map_to_gl() {
        assert_eq!(GLenum::from(ShaderStage::Vertex), gl::VERTEX_SHADER);
        assert_eq!(GLenum::from(ShaderStage::Fragment), gl::FRAGMENT_SHADER);
    }
}
