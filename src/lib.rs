pub mod core;
pub mod geometry;
pub mod graphics;
pub mod loaders;
pub mod scene;

pub use crate::core::application::{run, Application, FrameContext};
pub use crate::core::engine_options::EngineOptions;
pub use crate::core::error::EngineError;
pub use crate::core::event::{Event, EventDispatcher, EventType};
pub use crate::core::logging::{init_logging, LoggingConfig};
pub use crate::graphics::window::Window;
pub use crate::scene::scene::Scene;
pub use crate::scene::Shape;
