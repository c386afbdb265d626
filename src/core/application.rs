use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::engine_options::EngineOptions;
use crate::core::error::EngineError;
use crate::core::event::{
    Event, EventDispatcher, EventKeyPressed, EventKeyReleased, EventMouseMoved, EventWindowClose,
    EventWindowResize,
};
use crate::core::logging::{init_logging, LoggingConfig};
use crate::core::time::FrameTimer;
use crate::graphics::window::Window;

/// What the application sees each frame.
pub struct FrameContext<'a> {
    pub window: &'a mut Window,
    pub dt: Duration,
}

pub trait Application {
    fn on_update(&mut self, _ctx: &mut FrameContext) {}

    fn on_event(&mut self, _event: &Event) {}
}

fn register_listeners(dispatcher: &mut EventDispatcher, close_window: Rc<Cell<bool>>) {
    dispatcher.add_event_listener(|e: &EventMouseMoved| {
        log::trace!("[MouseMoved] Mouse moved to {}x{}", e.x, e.y);
    });

    dispatcher.add_event_listener(|e: &EventWindowResize| {
        log::info!("[Resized] Changed size to {}x{}", e.width, e.height);
    });

    dispatcher.add_event_listener(move |_: &EventWindowClose| {
        log::info!("[WindowClose]");
        close_window.set(true);
    });

    dispatcher.add_event_listener(|e: &EventKeyPressed| {
        log::trace!("[KeyPressed] key {}", e.0.key);
    });

    dispatcher.add_event_listener(|e: &EventKeyReleased| {
        log::trace!("[KeyReleased] key {}", e.0.key);
    });
}

/// Opens the window and drives `app` until the window is closed.
pub fn run<A: Application>(app: &mut A, options: &EngineOptions) -> Result<i32, EngineError> {
    init_logging(LoggingConfig::with_filter(options.log_filter.clone()));
    log::info!("Starting application");

    let (width, height) = options.window_size;
    let mut window = Window::new(
        &options.title,
        width,
        height,
        options.vsync,
        options.background_color,
    )?;

    let close_window = Rc::new(Cell::new(false));
    let mut dispatcher = EventDispatcher::new();
    register_listeners(&mut dispatcher, close_window.clone());

    let mut timer = FrameTimer::new();
    while !close_window.get() && !window.should_close() {
        timer.frame_start();
        window.begin_frame();

        let mut ctx = FrameContext {
            window: &mut window,
            dt: timer.last_frame(),
        };
        app.on_update(&mut ctx);

        window.end_frame();
        for event in window.poll_events() {
            dispatcher.dispatch(&event);
            app.on_event(&event);
        }

        timer.frame_end();
    }

    drop(window);
    log::info!("Closing application");

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::EventType;

    #[test]
    fn close_event_sets_flag() {
        let close_window = Rc::new(Cell::new(false));
        let mut dispatcher = EventDispatcher::new();
        register_listeners(&mut dispatcher, close_window.clone());

        dispatcher.dispatch(&Event::from(EventWindowResize {
            width: 640,
            height: 480,
        }));
        assert!(!close_window.get());

        dispatcher.dispatch(&EventWindowClose.into());
        assert!(close_window.get());
    }

    #[test]
    fn every_logged_event_has_a_listener() {
        let mut dispatcher = EventDispatcher::new();
        register_listeners(&mut dispatcher, Rc::new(Cell::new(false)));

        for event_type in [
            EventType::MouseMoved,
            EventType::WindowResize,
            EventType::WindowClose,
            EventType::KeyPressed,
            EventType::KeyReleased,
        ] {
            assert!(dispatcher.has_listener(event_type), "{:?}", event_type);
        }
        assert!(!dispatcher.has_listener(EventType::MouseButtonPressed));
    }
}
