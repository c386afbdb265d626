use gl::types::GLint;
use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

use crate::graphics::shader_program::ShaderProgram;

fn to_array(v: &glm::Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct MaterialLocations {
    ambient: GLint,
    diffuse: GLint,
    specular: GLint,
    diffuse_tex: GLint,
    specular_tex: GLint,
}

/// Phong surface parameters fed to the `material` uniform block of the lit shader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    ambient: [f32; 3],
    diffuse: [f32; 3],
    specular: [f32; 3],
    diffuse_tex: i32,
    specular_tex: i32,

    #[serde(skip)]
    locations: Option<MaterialLocations>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            ambient: [0.1; 3],
            diffuse: [1.0; 3],
            specular: [1.0; 3],
            diffuse_tex: 0,
            specular_tex: 1,
            locations: None,
        }
    }
}

impl Material {
    pub fn new(
        ambient: glm::Vec3,
        diffuse: glm::Vec3,
        specular: glm::Vec3,
        diffuse_tex: i32,
        specular_tex: i32,
    ) -> Self {
        Material {
            ambient: to_array(&ambient),
            diffuse: to_array(&diffuse),
            specular: to_array(&specular),
            diffuse_tex,
            specular_tex,
            locations: None,
        }
    }

    pub fn ambient(&self) -> glm::Vec3 {
        glm::make_vec3(&self.ambient)
    }

    pub fn diffuse(&self) -> glm::Vec3 {
        glm::make_vec3(&self.diffuse)
    }

    pub fn specular(&self) -> glm::Vec3 {
        glm::make_vec3(&self.specular)
    }

    pub fn diffuse_tex(&self) -> i32 {
        self.diffuse_tex
    }

    pub fn specular_tex(&self) -> i32 {
        self.specular_tex
    }

    pub fn set_ambient(&mut self, ambient: glm::Vec3) {
        self.ambient = to_array(&ambient);
    }

    pub fn set_diffuse(&mut self, diffuse: glm::Vec3) {
        self.diffuse = to_array(&diffuse);
    }

    pub fn set_specular(&mut self, specular: glm::Vec3) {
        self.specular = to_array(&specular);
    }

    pub fn set_diffuse_tex(&mut self, slot: i32) {
        self.diffuse_tex = slot;
    }

    pub fn set_specular_tex(&mut self, slot: i32) {
        self.specular_tex = slot;
    }

    pub fn init_shader(&mut self, program: &ShaderProgram) {
        self.locations = Some(MaterialLocations {
            ambient: program.uniform_location("material.ambient"),
            diffuse: program.uniform_location("material.diffuse"),
            specular: program.uniform_location("material.specular"),
            diffuse_tex: program.uniform_location("material.diffuseTex"),
            specular_tex: program.uniform_location("material.specularTex"),
        });
    }

    /// Uploads into the bound `program`. Does nothing before `init_shader`.
    pub fn update_shader(&self, program: &ShaderProgram) {
        let locations = match &self.locations {
            Some(locations) => locations,
            None => return,
        };

        program.set_vec3(locations.ambient, &self.ambient());
        program.set_vec3(locations.diffuse, &self.diffuse());
        program.set_vec3(locations.specular, &self.specular());
        program.set_i32(locations.diffuse_tex, self.diffuse_tex);
        program.set_i32(locations.specular_tex, self.specular_tex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let material = Material::default();

        assert_eq!(material.ambient(), glm::vec3(0.1, 0.1, 0.1));
        assert_eq!(material.diffuse(), glm::vec3(1.0, 1.0, 1.0));
        assert_eq!(material.specular(), glm::vec3(1.0, 1.0, 1.0));
        assert_eq!(material.diffuse_tex(), 0);
        assert_eq!(material.specular_tex(), 1);
    }

    #[test]
    fn setters() {
        let mut material = Material::default();
        material.set_ambient(glm::vec3(0.3, 0.2, 0.1));
        material.set_specular_tex(3);

        assert_eq!(material.ambient(), glm::vec3(0.3, 0.2, 0.1));
        assert_eq!(material.specular_tex(), 3);
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let material: Material = ron::from_str("(ambient: (0.5, 0.5, 0.5))").unwrap();

        assert_eq!(material.ambient(), glm::vec3(0.5, 0.5, 0.5));
        assert_eq!(material.specular_tex(), 1);
    }
}
