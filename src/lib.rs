//! Account API - signup and login backend
//!
//! Requests flow through a small presentation pipeline: a `Controller`
//! validates the body, calls a use case and shapes a response envelope;
//! a logging decorator records the cause of every server error.
//!
//! # Architecture Layers
//!
//! - **api**: Envelopes, error taxonomy, controllers, decorator, axum glue
//! - **domain**: Account models and use-case traits
//! - **services**: Use-case implementations, data protocols, composition
//! - **infra**: Database, repositories, hashing and token adapters
//! - **utils**: Email validation adapter
//! - **config**, **cli**, **commands**: Settings and process entry points
//! - **errors**: Capability error type
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::{AppState, Controller, HttpRequest, HttpResponse};
pub use config::Config;
pub use domain::{AccountModel, AddAccountModel};
pub use errors::{AppError, AppResult};
