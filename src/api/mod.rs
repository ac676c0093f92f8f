//! API layer - Presentation pipeline and HTTP glue
//!
//! - `http`, `errors`: request/response envelopes, error taxonomy, response helpers
//! - `protocols`: the `Controller` contract and the email-validator capability
//! - `controllers`, `decorators`: signup/login and the error-logging wrapper
//! - `adapter`, `handlers`, `routes`: axum transport
//! - `factories`, `state`: wiring

pub mod adapter;
pub mod controllers;
pub mod decorators;
pub mod errors;
pub mod factories;
pub mod handlers;
pub mod http;
pub mod openapi;
pub mod protocols;
pub mod routes;
pub mod state;

pub use errors::PresentationError;
pub use http::{bad_request, ok, server_error, unauthorized, HttpBody, HttpRequest, HttpResponse};
pub use openapi::ApiDoc;
pub use protocols::{Controller, EmailValidator};
pub use routes::create_router;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use protocols::{MockController, MockEmailValidator};
