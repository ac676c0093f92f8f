//! Shared test doubles for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::mpsc;

use account_api::api::{Controller, EmailValidator, HttpRequest, HttpResponse};
use account_api::domain::{AccountModel, AddAccount, AddAccountModel, Authentication};
use account_api::errors::{AppError, AppResult};
use account_api::services::LogErrorRepository;

mock! {
    pub EmailValidatorStub {}

    impl EmailValidator for EmailValidatorStub {
        fn is_valid(&self, email: &str) -> AppResult<bool>;
    }
}

mock! {
    pub AddAccountStub {}

    #[async_trait]
    impl AddAccount for AddAccountStub {
        async fn add(&self, account: AddAccountModel) -> AppResult<AccountModel>;
    }
}

mock! {
    pub AuthenticationStub {}

    #[async_trait]
    impl Authentication for AuthenticationStub {
        async fn auth(&self, email: String, password: String) -> AppResult<Option<String>>;
    }
}

mock! {
    pub ControllerStub {}

    #[async_trait]
    impl Controller for ControllerStub {
        async fn handle(&self, request: HttpRequest) -> HttpResponse;
    }
}

/// Validator that accepts every email.
pub fn accepting_email_validator() -> MockEmailValidatorStub {
    let mut validator = MockEmailValidatorStub::new();
    validator.expect_is_valid().returning(|_| Ok(true));
    validator
}

pub fn fake_account() -> AccountModel {
    AccountModel {
        id: "valid_id".to_string(),
        name: "valid_name".to_string(),
        email: "valid_email@mail.com".to_string(),
        password: "valid_password".to_string(),
    }
}

/// Error-log repository that reports every write on a channel.
pub struct LogErrorRepositorySpy {
    tx: mpsc::UnboundedSender<String>,
    fail: bool,
}

impl LogErrorRepositorySpy {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, fail: false }, rx)
    }

    /// Spy whose writes are reported, then fail.
    pub fn failing() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, fail: true }, rx)
    }
}

#[async_trait]
impl LogErrorRepository for LogErrorRepositorySpy {
    async fn log_error(&self, stack: &str) -> AppResult<()> {
        self.tx.send(stack.to_owned()).ok();
        if self.fail {
            return Err(AppError::internal("log store unavailable"));
        }
        Ok(())
    }
}

/// Controller returning a canned response and recording what it received.
pub struct FixedController {
    response: HttpResponse,
    pub received: Mutex<Vec<HttpRequest>>,
}

impl FixedController {
    pub fn new(response: HttpResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            received: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Controller for FixedController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.received.lock().unwrap().push(request);
        self.response.clone()
    }
}
