//! Login controller.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::api::errors::PresentationError;
use crate::api::http::{bad_request, ok, server_error, unauthorized, HttpRequest, HttpResponse};
use crate::api::protocols::{Controller, EmailValidator};
use crate::config::{FIELD_EMAIL, FIELD_PASSWORD, LOGIN_REQUIRED_FIELDS};
use crate::domain::Authentication;
use crate::errors::AppResult;

/// Successful login payload
#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenBody {
    /// JWT access token
    #[serde(rename = "accessToken")]
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

/// Validates credentials and exchanges them for an access token.
pub struct LoginController {
    email_validator: Arc<dyn EmailValidator>,
    authentication: Arc<dyn Authentication>,
}

impl LoginController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        authentication: Arc<dyn Authentication>,
    ) -> Self {
        Self {
            email_validator,
            authentication,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> AppResult<HttpResponse> {
        if let Some(field) = request.first_missing_field(LOGIN_REQUIRED_FIELDS) {
            tracing::debug!(field, "login rejected: missing param");
            return Ok(bad_request(PresentationError::missing_param(field)));
        }

        let email = request.field_text(FIELD_EMAIL);
        if !self.email_validator.is_valid(&email)? {
            tracing::debug!("login rejected: invalid email");
            return Ok(bad_request(PresentationError::invalid_param(FIELD_EMAIL)));
        }

        let token = self
            .authentication
            .auth(email, request.field_text(FIELD_PASSWORD))
            .await?;

        match token.filter(|token| !token.is_empty()) {
            Some(access_token) => Ok(ok(serde_json::to_value(AccessTokenBody {
                access_token,
            })?)),
            None => {
                tracing::debug!("login rejected: credentials did not match");
                Ok(unauthorized())
            }
        }
    }
}

#[async_trait]
impl Controller for LoginController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.try_handle(&request)
            .await
            .unwrap_or_else(|cause| server_error(&cause))
    }
}
