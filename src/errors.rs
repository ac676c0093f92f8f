//! Centralized error handling for capabilities and infrastructure.
//!
//! `AppError` is what adapters and use cases return. Controllers never let
//! it reach the caller: they turn every `Err` into a `500` response through
//! [`crate::api::server_error`].

use thiserror::Error;

/// Application error types
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug)]
pub enum AppError {
    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("Password hashing error: {0}")]
    Hashing(String),

    // Startup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
