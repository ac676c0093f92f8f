//! Signup controller.

use async_trait::async_trait;
use std::sync::Arc;

use crate::api::errors::PresentationError;
use crate::api::http::{bad_request, ok, server_error, HttpRequest, HttpResponse};
use crate::api::protocols::{Controller, EmailValidator};
use crate::config::{
    FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, FIELD_PASSWORD_CONFIRMATION,
    SIGNUP_REQUIRED_FIELDS,
};
use crate::domain::{AddAccount, AddAccountModel};
use crate::errors::AppResult;

/// Validates signup data and delegates account creation.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn try_handle(&self, request: &HttpRequest) -> AppResult<HttpResponse> {
        if let Some(field) = request.first_missing_field(SIGNUP_REQUIRED_FIELDS) {
            tracing::debug!(field, "signup rejected: missing param");
            return Ok(bad_request(PresentationError::missing_param(field)));
        }

        if request.field(FIELD_PASSWORD) != request.field(FIELD_PASSWORD_CONFIRMATION) {
            tracing::debug!("signup rejected: password confirmation mismatch");
            return Ok(bad_request(PresentationError::invalid_param(
                FIELD_PASSWORD_CONFIRMATION,
            )));
        }

        let email = request.field_text(FIELD_EMAIL);
        if !self.email_validator.is_valid(&email)? {
            tracing::debug!("signup rejected: invalid email");
            return Ok(bad_request(PresentationError::invalid_param(FIELD_EMAIL)));
        }

        // passwordConfirmation stops here
        let account = self
            .add_account
            .add(AddAccountModel::new(
                request.field_text(FIELD_NAME),
                email,
                request.field_text(FIELD_PASSWORD),
            ))
            .await?;

        tracing::info!(account_id = %account.id, "account created");
        Ok(ok(serde_json::to_value(account)?))
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.try_handle(&request)
            .await
            .unwrap_or_else(|cause| server_error(&cause))
    }
}
