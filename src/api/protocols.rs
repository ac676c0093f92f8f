//! Presentation-layer contracts.

use async_trait::async_trait;

use super::http::{HttpRequest, HttpResponse};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Maps one request envelope to one response envelope.
///
/// Implementations never fail: every error is already shaped into the
/// returned response.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

/// Email format check.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}
