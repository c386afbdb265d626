use std::collections::HashMap;

use gl::types::{GLint, GLuint};
use nalgebra_glm as glm;

use crate::graphics::shader_program::ShaderProgram;

pub trait Light {
    fn init_shader(&mut self, program: &ShaderProgram);
    fn update_shader(&self, program: &ShaderProgram);
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PointLightLocations {
    position: GLint,
    intensity: GLint,
    color: GLint,
    constant: GLint,
    linear: GLint,
    quadratic: GLint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub position: glm::Vec3,
    pub intensity: f32,
    pub color: glm::Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,

    locations: HashMap<GLuint, PointLightLocations>,
}

impl Default for PointLight {
    fn default() -> Self {
        PointLight::new(
            glm::vec3(1.0, 1.0, 1.0),
            1.0,
            glm::vec3(1.0, 1.0, 1.0),
            1.0,
            0.045,
            0.0075,
        )
    }
}

impl PointLight {
    pub fn new(
        position: glm::Vec3,
        intensity: f32,
        color: glm::Vec3,
        constant: f32,
        linear: f32,
        quadratic: f32,
    ) -> Self {
        PointLight {
            position,
            intensity,
            color,
            constant,
            linear,
            quadratic,
            locations: HashMap::new(),
        }
    }

    pub fn position(&self) -> glm::Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: glm::Vec3) {
        self.position = position;
    }

    /// Same falloff the lit fragment shader applies.
    pub fn attenuation(&self, distance: f32) -> f32 {
        self.constant / (1.0 + self.linear * distance + self.quadratic * distance * distance)
    }

    pub fn is_initialized_for(&self, program: &ShaderProgram) -> bool {
        self.locations.contains_key(&program.id())
    }
}

impl Light for PointLight {
    fn init_shader(&mut self, program: &ShaderProgram) {
        self.locations
            .entry(program.id())
            .or_insert_with(|| PointLightLocations {
                position: program.uniform_location("pointLight.position"),
                intensity: program.uniform_location("pointLight.intensity"),
                color: program.uniform_location("pointLight.color"),
                constant: program.uniform_location("pointLight.constant"),
                linear: program.uniform_location("pointLight.linear"),
                quadratic: program.uniform_location("pointLight.quadratic"),
            });
    }

    fn update_shader(&self, program: &ShaderProgram) {
        let locations = match self.locations.get(&program.id()) {
            Some(locations) => locations,
            None => {
                log::warn!("point light not initialized for program {}", program.id());
                return;
            }
        };

        program.bind();
        program.set_vec3(locations.position, &self.position);
        program.set_f32(locations.intensity, self.intensity);
        program.set_vec3(locations.color, &self.color);
        program.set_f32(locations.constant, self.constant);
        program.set_f32(locations.linear, self.linear);
        program.set_f32(locations.quadratic, self.quadratic);
    }
}
