use nalgebra_glm as glm;

use crate::core::engine_options::TransformOptions;

/// Scale, Euler rotation in degrees, and location, with the composed model matrix cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    scale: glm::Vec3,
    rotation: glm::Vec3,
    location: glm::Vec3,
    model_matrix: glm::Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            scale: glm::vec3(1.0, 1.0, 1.0),
            rotation: glm::vec3(0.0, 0.0, 0.0),
            location: glm::vec3(0.0, 0.0, 0.0),
            model_matrix: glm::Mat4::identity(),
        }
    }
}

impl From<&TransformOptions> for Transform {
    fn from(options: &TransformOptions) -> Self {
        let mut transform = Transform::default();
        transform.set_scale(glm::make_vec3(&options.scale));
        transform.set_rotation(glm::make_vec3(&options.rotation));
        transform.set_location(glm::make_vec3(&options.location));
        transform
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
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

    pub fn model_matrix(&self) -> &glm::Mat4 {
        &self.model_matrix
    }

    pub fn set_scale(&mut self, scale: glm::Vec3) {
        if self.scale != scale {
            self.scale = scale;
            self.recalculate();
        }
    }

    pub fn set_rotation(&mut self, rotation: glm::Vec3) {
        if self.rotation != rotation {
            self.rotation = rotation;
            self.recalculate();
        }
    }

    pub fn set_location(&mut self, location: glm::Vec3) {
        if self.location != location {
            self.location = location;
            self.recalculate();
        }
    }

    fn rotation_matrix(&self) -> glm::Mat4 {
        let radians = glm::radians(&self.rotation);

        glm::rotation(radians.z, &glm::vec3(0.0, 0.0, 1.0))
            * glm::rotation(radians.y, &glm::vec3(0.0, 1.0, 0.0))
            * glm::rotation(radians.x, &glm::vec3(1.0, 0.0, 0.0))
    }

    fn recalculate(&mut self) {
        self.model_matrix = glm::translation(&self.location)
            * self.rotation_matrix()
            * glm::scaling(&self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(transform: &Transform, p: glm::Vec3) -> glm::Vec3 {
        let v = transform.model_matrix() * glm::vec4(p.x, p.y, p.z, 1.0);
        glm::vec3(v.x, v.y, v.z)
    }

    fn close(a: glm::Vec3, b: glm::Vec3) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(*Transform::new().model_matrix(), glm::Mat4::identity());
    }

    #[test]
    fn scale_then_rotate_then_translate() {
        let mut transform = Transform::new();
        transform.set_scale(glm::vec3(2.0, 2.0, 2.0));
        transform.set_rotation(glm::vec3(0.0, 0.0, 90.0));
        transform.set_location(glm::vec3(0.0, 0.0, 5.0));

        // (1,0,0) -> scaled (2,0,0) -> rotated about Z (0,2,0) -> moved (0,2,5)
        assert!(close(
            apply(&transform, glm::vec3(1.0, 0.0, 0.0)),
            glm::vec3(0.0, 2.0, 5.0)
        ));
    }

    #[test]
    fn x_rotation_applies_before_z() {
        let mut transform = Transform::new();
        transform.set_rotation(glm::vec3(90.0, 0.0, 90.0));

        // Rx takes (0,1,0) to (0,0,1); Rz leaves it there
        assert!(close(
            apply(&transform, glm::vec3(0.0, 1.0, 0.0)),
            glm::vec3(0.0, 0.0, 1.0)
        ));
    }

    #[test]
    fn setting_same_value_keeps_matrix() {
        let mut transform = Transform::new();
        transform.set_location(glm::vec3(1.0, 2.0, 3.0));
        let before = *transform.model_matrix();

        transform.set_location(glm::vec3(1.0, 2.0, 3.0));
        assert_eq!(*transform.model_matrix(), before);
        assert_eq!(transform.location(), glm::vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn built_from_options() {
        let options = TransformOptions {
            scale: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0],
            location: [4.0, 0.0, 0.0],
        };
        let transform = Transform::from(&options);

        assert!(close(
            apply(&transform, glm::vec3(0.0, 0.0, 0.0)),
            glm::vec3(4.0, 0.0, 0.0)
        ));
    }
}
