pub mod application;
pub mod engine_options;
pub mod error;
pub mod event;
pub mod logging;
pub mod time;
