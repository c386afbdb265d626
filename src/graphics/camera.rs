use glfw::{Key, MouseButton};
use nalgebra_glm as glm;

use crate::graphics::shader_program::ShaderProgram;
use crate::graphics::window::{aspect_ratio, Window};

const MAX_PITCH_DEG: f32 = 85.0;
const MIN_DEPTH_RANGE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera: WASD to move, right mouse button to look around.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: glm::Vec3,
    pub orientation: glm::Vec3,
    pub up: glm::Vec3,

    speed: f32,
    base_speed: f32,
    fast_speed: f32,
    sensitivity: f32,
    first_click: bool,

    viewport: (u32, u32),
    fov_deg: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(position: glm::Vec3, viewport: (u32, u32)) -> Self {
        Camera {
            position,
            orientation: glm::vec3(0.0, 0.0, -1.0),
            up: glm::vec3(0.0, 1.0, 0.0),
            speed: 0.1,
            base_speed: 0.1,
            fast_speed: 0.4,
            sensitivity: 100.0,
            first_click: true,
            viewport,
            fov_deg: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn set_speeds(&mut self, base_speed: f32, fast_speed: f32) {
        self.base_speed = base_speed;
        self.fast_speed = fast_speed;
        self.speed = base_speed;
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Keeps the previous projection when `near`, `far` or `fov_deg` can't form a frustum.
    pub fn set_projection(&mut self, fov_deg: f32, near: f32, far: f32) {
        if !(near > 0.0 && far > near && fov_deg > 0.0 && fov_deg < 180.0) {
            log::warn!(
                "ignoring projection with fov {} near {} far {}",
                fov_deg,
                near,
                far
            );
            return;
        }

        self.fov_deg = fov_deg;
        self.near = near;
        self.far = far;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.orientation), &self.up)
    }

    pub fn projection(&self, fov_deg: f32, near: f32, far: f32) -> glm::Mat4 {
        let (width, height) = self.viewport;
        let far = far.max(near + MIN_DEPTH_RANGE);
        glm::perspective(aspect_ratio(width, height), fov_deg.to_radians(), near, far)
    }

    pub fn view_projection(&self, fov_deg: f32, near: f32, far: f32) -> glm::Mat4 {
        self.projection(fov_deg, near, far) * self.view_matrix()
    }

    /// Uploads projection * view into `uniform` of the bound `program`.
    pub fn set_matrix(&self, program: &ShaderProgram, uniform: &str) {
        let matrix = self.view_projection(self.fov_deg, self.near, self.far);
        program.set_mat4(program.uniform_location(uniform), &matrix);
    }

    pub fn set_position(&self, program: &ShaderProgram, uniform: &str) {
        program.set_vec3(program.uniform_location(uniform), &self.position);
    }

    fn right(&self) -> glm::Vec3 {
        glm::normalize(&glm::cross(&self.orientation, &self.up))
    }

    pub fn move_by(&mut self, movement: CameraMovement) {
        let step = match movement {
            CameraMovement::Forward => self.orientation,
            CameraMovement::Backward => -self.orientation,
            CameraMovement::Left => -self.right(),
            CameraMovement::Right => self.right(),
            CameraMovement::Up => self.up,
            CameraMovement::Down => -self.up,
        };

        self.position += self.speed * step;
    }

    pub fn set_fast(&mut self, fast: bool) {
        self.speed = if fast {
            self.fast_speed
        } else {
            self.base_speed
        };
    }

    /// Turns the camera by the cursor offset from the viewport centre.
    pub fn look(&mut self, mouse_x: f64, mouse_y: f64) {
        let (width, height) = (self.viewport.0.max(1) as f32, self.viewport.1.max(1) as f32);
        let rot_x = self.sensitivity * (mouse_y as f32 - height / 2.0) / height;
        let rot_y = self.sensitivity * (mouse_x as f32 - width / 2.0) / width;

        let pitched = glm::rotate_vec3(&self.orientation, (-rot_x).to_radians(), &self.right());
        let off_horizon = (glm::angle(&pitched, &self.up) - 90f32.to_radians()).abs();
        if off_horizon <= MAX_PITCH_DEG.to_radians() {
            self.orientation = pitched;
        }

        self.orientation = glm::rotate_vec3(&self.orientation, (-rot_y).to_radians(), &self.up);
    }

    pub fn inputs(&mut self, window: &mut Window) {
        const MOVES: [(Key, CameraMovement); 6] = [
            (Key::W, CameraMovement::Forward),
            (Key::S, CameraMovement::Backward),
            (Key::A, CameraMovement::Left),
            (Key::D, CameraMovement::Right),
            (Key::Space, CameraMovement::Up),
            (Key::LeftControl, CameraMovement::Down),
        ];

        for (key, movement) in MOVES {
            if window.key_pressed(key) {
                self.move_by(movement);
            }
        }

        self.set_fast(window.key_pressed(Key::LeftShift));

        let center = (window.width() as f64 / 2.0, window.height() as f64 / 2.0);
        if window.mouse_button_pressed(MouseButton::Button2) {
            window.set_cursor_hidden(true);

            if self.first_click {
                window.set_cursor_pos(center.0, center.1);
                self.first_click = false;
            }

            let (x, y) = window.cursor_pos();
            self.look(x, y);
            window.set_cursor_pos(center.0, center.1);
        } else if !self.first_click {
            window.set_cursor_hidden(false);
            self.first_click = true;
        }
    }
}
