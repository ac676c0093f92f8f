//! Email format validation backed by the `validator` crate.

use validator::ValidateEmail;

use crate::api::EmailValidator;
use crate::errors::AppResult;

/// HTML5-style email syntax check; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
