use std::time::Duration;

use nalgebra_glm as glm;

use crate::core::engine_options::{EngineOptions, LightOptions, ModelSource, SpinOptions};
use crate::core::error::EngineError;
use crate::graphics::camera::Camera;
use crate::graphics::light::{Light, PointLight};
use crate::graphics::window::Window;
use crate::scene::complex_model::ComplexModel;
use crate::scene::model::Model;
use crate::scene::primitive::PrimitiveShape;
use crate::scene::transform::Transform;
use crate::scene::Shape;

const VIEW_UNIFORM: &str = "view_matrix";
const CAMERA_POSITION_UNIFORM: &str = "cameraPos";

enum SceneModel {
    Single(Model),
    Complex(ComplexModel),
}

struct SceneShape {
    shape: PrimitiveShape,
    spin: Option<SpinOptions>,
}

/// Spin to add this frame, in degrees.
fn spin_step(spin: &SpinOptions, dt: Duration) -> f32 {
    spin.speed * dt.as_secs_f32()
}

impl From<&LightOptions> for PointLight {
    fn from(options: &LightOptions) -> Self {
        PointLight::new(
            glm::make_vec3(&options.position),
            options.intensity,
            glm::make_vec3(&options.color),
            options.constant,
            options.linear,
            options.quadratic,
        )
    }
}

pub struct Scene {
    camera: Camera,
    light: PointLight,
    shapes: Vec<SceneShape>,
    models: Vec<SceneModel>,
}

impl Scene {
    /// Uploads every configured shape and model. Needs a current GL context.
    pub fn from_options(options: &EngineOptions) -> Result<Scene, EngineError> {
        let camera_options = &options.camera;
        let mut camera = Camera::new(glm::make_vec3(&camera_options.position), options.window_size);
        camera.set_speeds(camera_options.speed, camera_options.fast_speed);
        camera.set_sensitivity(camera_options.sensitivity);
        camera.set_projection(camera_options.fov_deg, camera_options.near, camera_options.far);

        let mut light = PointLight::from(&options.light);

        let mut shapes = Vec::with_capacity(options.shapes.len());
        for description in &options.shapes {
            let mut shape = PrimitiveShape::from_kind(&description.kind)?;
            *shape.transform_mut() = Transform::from(&description.transform);
            shapes.push(SceneShape {
                shape,
                spin: description.spin.clone(),
            });
        }

        let mut models = Vec::with_capacity(options.models.len());
        for description in &options.models {
            let transform = &description.transform;
            let model = match &description.source {
                ModelSource::Obj { path, texture } => {
                    let mut model = Model::from_obj(path, texture)?;
                    *model.transform_mut() = Transform::from(transform);
                    light.init_shader(model.shader_program());
                    SceneModel::Single(model)
                }
                ModelSource::Stl { path } => {
                    let mut model = Model::from_stl(path)?;
                    *model.transform_mut() = Transform::from(transform);
                    SceneModel::Single(model)
                }
                ModelSource::Complex { parts } => {
                    let mut model = ComplexModel::new(parts)?;
                    model.set_scale(glm::make_vec3(&transform.scale));
                    model.set_rotation(glm::make_vec3(&transform.rotation));
                    model.set_location(glm::make_vec3(&transform.location));
                    SceneModel::Complex(model)
                }
            };
            models.push(model);
        }

        log::info!(
            "Scene ready: {} shapes, {} models",
            shapes.len(),
            models.len()
        );

        Ok(Scene {
            camera,
            light,
            shapes,
            models,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light_mut(&mut self) -> &mut PointLight {
        &mut self.light
    }

    pub fn update(&mut self, window: &mut Window, dt: Duration) {
        self.camera.set_viewport(window.width(), window.height());
        self.camera.inputs(window);

        for entry in &mut self.shapes {
            if let Some(spin) = &entry.spin {
                entry
                    .shape
                    .rotate(glm::make_vec3(&spin.axis), spin_step(spin, dt));
            }
        }
    }

    pub fn render(&mut self) {
        for entry in &self.shapes {
            entry.shape.update_camera(&self.camera, VIEW_UNIFORM);
            entry.shape.render();
        }

        for model in &self.models {
            match model {
                SceneModel::Single(model) => {
                    let program = model.shader_program();
                    program.bind();
                    self.camera.set_matrix(program, VIEW_UNIFORM);
                    self.camera.set_position(program, CAMERA_POSITION_UNIFORM);
                    if self.light.is_initialized_for(program) {
                        self.light.update_shader(program);
                    }
                    model.render();
                }
                SceneModel::Complex(model) => {
                    model.update_camera(&self.camera, VIEW_UNIFORM, CAMERA_POSITION_UNIFORM);
                    model.update_light(&mut self.light);
                    model.render();
                }
            }
        }
    }
}
