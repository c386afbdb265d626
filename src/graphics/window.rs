use std::sync::mpsc::Receiver;

use glfw::{Action, Context, CursorMode, Key, MouseButton, WindowEvent};

use crate::core::error::WindowError;
use crate::core::event::{
    Event, EventKeyPressed, EventKeyReleased, EventMouseButtonPressed, EventMouseButtonReleased,
    EventMouseMoved, EventWindowClose, EventWindowResize, KeyEvent, MouseButtonEvent,
};

pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::Window,
    events: Receiver<(f64, WindowEvent)>,
    width: u32,
    height: u32,
    background_color: [f32; 4],
}

impl Window {
    pub fn new(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
        background_color: [f32; 4],
    ) -> Result<Window, WindowError> {
        let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).map_err(|e| {
            log::error!("can't initialize GLFW: {:?}", e);
            WindowError::InitFailed(format!("{:?}", e))
        })?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(4, 6));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WindowError::CreateFailed {
                title: title.to_string(),
                width,
                height,
            })?;

        window.make_current();

        gl_loader::init_gl();
        gl::load_with(|symbol| gl_loader::get_proc_address(symbol) as *const _);

        glfw.set_swap_interval(if vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        window.set_all_polling(true);

        let (fb_width, fb_height) = window.get_framebuffer_size();
        unsafe {
            gl::Viewport(0, 0, fb_width, fb_height);
            gl::Enable(gl::DEPTH_TEST);
        }

        log::info!("Creating window {} with size {}x{}", title, width, height);

        Ok(Window {
            glfw,
            window,
            events,
            width,
            height,
            background_color,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }

    pub fn background_color(&self) -> [f32; 4] {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: [f32; 4]) {
        self.background_color = color;
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn begin_frame(&self) {
        let [r, g, b, a] = self.background_color;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    pub fn end_frame(&mut self) {
        self.window.swap_buffers();
    }

    pub fn poll_events(&mut self) -> Vec<Event> {
        self.glfw.poll_events();

        let mut out = Vec::new();
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                WindowEvent::Size(width, height) => {
                    self.width = width.max(0) as u32;
                    self.height = height.max(0) as u32;
                    out.push(
                        EventWindowResize {
                            width: self.width,
                            height: self.height,
                        }
                        .into(),
                    );
                }

                WindowEvent::FramebufferSize(width, height) => unsafe {
                    gl::Viewport(0, 0, width, height);
                },

                WindowEvent::Close => out.push(EventWindowClose.into()),

                WindowEvent::Key(key, scancode, action, mods) => {
                    let key_event = KeyEvent {
                        key: key as i32,
                        scancode,
                        action: action as i32,
                        mods: mods.bits() as i32,
                    };

                    match action {
                        Action::Press | Action::Repeat => {
                            out.push(EventKeyPressed(key_event).into())
                        }
                        Action::Release => out.push(EventKeyReleased(key_event).into()),
                    }
                }

                WindowEvent::MouseButton(button, action, _mods) => {
                    let (x, y) = self.window.get_cursor_pos();
                    let button_event = MouseButtonEvent {
                        button: button as i32,
                        x,
                        y,
                    };

                    match action {
                        Action::Press => out.push(EventMouseButtonPressed(button_event).into()),
                        Action::Release => {
                            out.push(EventMouseButtonReleased(button_event).into())
                        }
                        Action::Repeat => {}
                    }
                }

                WindowEvent::CursorPos(x, y) => out.push(EventMouseMoved { x, y }.into()),

                _ => {}
            }
        }

        out
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.window.get_key(key) == Action::Press
    }

    pub fn mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.window.get_mouse_button(button) == Action::Press
    }

    pub fn cursor_pos(&self) -> (f64, f64) {
        self.window.get_cursor_pos()
    }

    pub fn set_cursor_pos(&mut self, x: f64, y: f64) {
        self.window.set_cursor_pos(x, y);
    }

    pub fn set_cursor_hidden(&mut self, hidden: bool) {
        self.window.set_cursor_mode(if hidden {
            CursorMode::Hidden
        } else {
            CursorMode::Normal
        });
    }

    pub fn current_time(&self) -> f64 {
        self.glfw.get_time()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::info!("Closing window");
    }
}

/// A minimised window reports a zero side; the ratio falls back to 1 then.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_empty_window() {
        assert_eq!(aspect_ratio(800, 0), 1.0);
        assert_eq!(aspect_ratio(0, 600), 1.0);
        assert_eq!(aspect_ratio(0, 0), 1.0);
        assert_eq!(aspect_ratio(800, 400), 2.0);
    }
}
