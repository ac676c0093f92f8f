//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod account_repository;
pub mod entities;
mod log_repository;

pub use account_repository::AccountStore;
pub use log_repository::LogStore;
