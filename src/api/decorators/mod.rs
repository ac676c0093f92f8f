//! Controller decorators (cross-cutting concerns).

mod log;

pub use log::LogControllerDecorator;
