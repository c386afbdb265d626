use nalgebra_glm as glm;
use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::graphics::camera::Camera;
use crate::graphics::light::Light;
use crate::graphics::material::Material;
use crate::graphics::shader_program::ShaderProgram;
use crate::scene::model::Model;
use crate::scene::Shape;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelData {
    pub model_path: String,
    pub texture_path: String,
}

/// Several textured OBJ parts moved as one.
pub struct ComplexModel {
    models: Vec<Model>,
    scale: glm::Vec3,
    rotation: glm::Vec3,
    location: glm::Vec3,
}

impl ComplexModel {
    pub fn new(parts: &[ModelData]) -> Result<ComplexModel, EngineError> {
        let models = parts
            .iter()
            .map(|part| Model::from_obj(&part.model_path, &part.texture_path))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Loaded complex model with {} parts", models.len());

        Ok(ComplexModel {
            models,
            scale: glm::vec3(1.0, 1.0, 1.0),
            rotation: glm::vec3(0.0, 0.0, 0.0),
            location: glm::vec3(0.0, 0.0, 0.0),
        })
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn render(&self) {
        for model in &self.models {
            model.render();
        }
    }

    pub fn scale(&self) -> glm::Vec3 {
        self.scale
    }

    pub fn rotation(&self) -> glm::Vec3 {
        self.rotation
    }

    pub fn location(&self) -> glm::Vec3 {
        self.location
    }

    pub fn set_scale(&mut self, scale: glm::Vec3) {
        for model in &mut self.models {
            model.set_scale(scale);
        }
        self.scale = scale;
    }

    pub fn set_rotation(&mut self, rotation: glm::Vec3) {
        for model in &mut self.models {
            model.set_rotation(rotation);
        }
        self.rotation = rotation;
    }

    pub fn set_location(&mut self, location: glm::Vec3) {
        for model in &mut self.models {
            model.set_location(location);
        }
        self.location = location;
    }

    pub fn set_material(&mut self, material: Material, index: usize) {
        match self.models.get_mut(index) {
            Some(model) => model.set_material(material),
            None => log::warn!("no part {} in complex model of {}", index, self.models.len()),
        }
    }

    pub fn material(&self, index: usize) -> Option<&Material> {
        self.models.get(index).and_then(|model| model.material())
    }

    pub fn update_camera(&self, camera: &Camera, view_name: &str, pos_name: &str) {
        for model in &self.models {
            let program = model.shader_program();
            program.bind();
            camera.set_matrix(program, view_name);
            camera.set_position(program, pos_name);
        }
    }

    pub fn update_light<L: Light>(&self, light: &mut L) {
        for model in &self.models {
            let program = model.shader_program();
            light.init_shader(program);
            light.update_shader(program);
        }
    }

    pub fn shader_program(&self) -> Option<&ShaderProgram> {
        self.models.first().map(|model| model.shader_program())
    }
}
