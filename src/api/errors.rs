//! Presentation error taxonomy.
//!
//! Closed set of failures a controller can report. Each one rides inside an
//! [`HttpResponse`](super::HttpResponse) body; the status code is assigned by
//! the response helpers in [`super::http`], never by the error itself.

use thiserror::Error;

/// Errors carried in non-200 response bodies.
///
/// Equality is structural so tests can compare whole responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    /// A required field was absent or falsy
    #[error("Missing param: {0}")]
    MissingParam(String),

    /// A field failed semantic validation
    #[error("Invalid param: {0}")]
    InvalidParam(String),

    /// Unexpected capability failure; holds the cause description for the
    /// error log, never shown to clients
    #[error("Internal server error")]
    Server(String),

    /// Credentials did not resolve to a token
    #[error("Unauthorized")]
    Unauthorized,
}

impl PresentationError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        PresentationError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        PresentationError::InvalidParam(field.into())
    }

    pub fn server(stack: impl Into<String>) -> Self {
        PresentationError::Server(stack.into())
    }

    /// Cause description of a server error.
    pub fn stack(&self) -> Option<&str> {
        match self {
            PresentationError::Server(stack) => Some(stack),
            _ => None,
        }
    }
}
