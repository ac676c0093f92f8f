//! Signup controller tests
//!
//! Drives `SignUpController` through the `Controller` contract with mocked
//! capabilities.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use mockall::predicate::eq;
use serde_json::{json, Value};

use account_api::api::controllers::SignUpController;
use account_api::api::{Controller, HttpBody, HttpRequest, PresentationError};
use account_api::domain::{AccountModel, AddAccountModel};
use account_api::errors::AppError;

use common::{accepting_email_validator, fake_account, MockAddAccountStub, MockEmailValidatorStub};

fn valid_body() -> Value {
    json!({
        "name": "any_name",
        "email": "any_email@mail.com",
        "password": "any_password",
        "passwordConfirmation": "any_password"
    })
}

fn body_without(field: &str) -> Value {
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove(field);
    body
}

fn add_account_returning_fake() -> MockAddAccountStub {
    let mut add_account = MockAddAccountStub::new();
    add_account
        .expect_add()
        .returning(|_| Ok(fake_account()));
    add_account
}

fn make_sut(
    validator: MockEmailValidatorStub,
    add_account: MockAddAccountStub,
) -> SignUpController {
    SignUpController::new(Arc::new(validator), Arc::new(add_account))
}

fn untouched_add_account() -> MockAddAccountStub {
    let mut add_account = MockAddAccountStub::new();
    add_account.expect_add().never();
    add_account
}

// =============================================================================
// Missing parameters
// =============================================================================

#[tokio::test]
async fn test_missing_fields_return_400_naming_the_field() {
    for field in ["name", "email", "password", "passwordConfirmation"] {
        let sut = make_sut(accepting_email_validator(), untouched_add_account());

        let response = sut.handle(HttpRequest::new(body_without(field))).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST, "field {}", field);
        assert_eq!(
            response.body,
            HttpBody::Error(PresentationError::missing_param(field)),
            "field {}",
            field
        );
    }
}

#[tokio::test]
async fn test_first_missing_field_in_order_is_reported() {
    let sut = make_sut(accepting_email_validator(), untouched_add_account());

    let response = sut
        .handle(HttpRequest::new(json!({ "password": "x" })))
        .await;

    assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::missing_param("name"))
    );
}

#[tokio::test]
async fn test_falsy_values_count_as_missing() {
    let sut = make_sut(accepting_email_validator(), untouched_add_account());
    let mut body = valid_body();
    body["name"] = json!("");

    let response = sut.handle(HttpRequest::new(body)).await;

    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::missing_param("name"))
    );

    let sut = make_sut(accepting_email_validator(), untouched_add_account());
    let mut body = valid_body();
    body["email"] = Value::Null;

    let response = sut.handle(HttpRequest::new(body)).await;

    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::missing_param("email"))
    );
}

#[tokio::test]
async fn test_empty_body_reports_name() {
    let sut = make_sut(accepting_email_validator(), untouched_add_account());

    let response = sut.handle(HttpRequest::new(json!({}))).await;

    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::missing_param("name"))
    );
}

// =============================================================================
// Invalid parameters
// =============================================================================

#[tokio::test]
async fn test_password_confirmation_mismatch_returns_400_before_email_check() {
    let mut validator = MockEmailValidatorStub::new();
    validator.expect_is_valid().never();
    let sut = make_sut(validator, untouched_add_account());
    let mut body = valid_body();
    body["passwordConfirmation"] = json!("invalid_password");

    let response = sut.handle(HttpRequest::new(body)).await;

    assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::invalid_param("passwordConfirmation"))
    );
}

#[tokio::test]
async fn test_invalid_email_returns_400_without_creating_account() {
    let mut validator = MockEmailValidatorStub::new();
    validator.expect_is_valid().times(1).returning(|_| Ok(false));
    let sut = make_sut(validator, untouched_add_account());

    let response = sut.handle(HttpRequest::new(valid_body())).await;

    assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::invalid_param("email"))
    );
}

#[tokio::test]
async fn test_validator_receives_the_request_email() {
    let mut validator = MockEmailValidatorStub::new();
    validator
        .expect_is_valid()
        .with(eq("any_email@mail.com"))
        .times(1)
        .returning(|_| Ok(true));
    let sut = make_sut(validator, add_account_returning_fake());

    sut.handle(HttpRequest::new(valid_body())).await;
}

// =============================================================================
// Server errors
// =============================================================================

#[tokio::test]
async fn test_validator_failure_returns_500_with_cause() {
    let mut validator = MockEmailValidatorStub::new();
    validator
        .expect_is_valid()
        .returning(|_| Err(AppError::internal("validator crashed")));
    let sut = make_sut(validator, untouched_add_account());

    let response = sut.handle(HttpRequest::new(valid_body())).await;

    assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        HttpBody::Error(PresentationError::server("Internal error: validator crashed"))
    );
    assert_eq!(response.error().unwrap().to_string(), "Internal server error");
}

#[tokio::test]
async fn test_add_account_failure_returns_500() {
    let mut add_account = MockAddAccountStub::new();
    add_account
        .expect_add()
        .returning(|_| Err(AppError::internal("insert failed")));
    let sut = make_sut(accepting_email_validator(), add_account);

    let response = sut.handle(HttpRequest::new(valid_body())).await;

    assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.server_error_stack(),
        Some("Internal error: insert failed")
    );
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn test_add_account_receives_fields_without_confirmation() {
    let mut add_account = MockAddAccountStub::new();
    add_account
        .expect_add()
        .with(eq(AddAccountModel::new(
            "any_name",
            "any_email@mail.com",
            "any_password",
        )))
        .times(1)
        .returning(|_| Ok(fake_account()));
    let sut = make_sut(accepting_email_validator(), add_account);

    sut.handle(HttpRequest::new(valid_body())).await;
}

#[tokio::test]
async fn test_valid_request_returns_200_with_account() {
    let sut = make_sut(accepting_email_validator(), add_account_returning_fake());

    let response = sut.handle(HttpRequest::new(valid_body())).await;

    assert_eq!(response.status_code, StatusCode::OK);
    assert_eq!(
        response.body,
        HttpBody::Payload(json!({
            "id": "valid_id",
            "name": "valid_name",
            "email": "valid_email@mail.com",
            "password": "valid_password"
        }))
    );
}

#[tokio::test]
async fn test_signup_returns_stored_account_for_ana() {
    let mut add_account = MockAddAccountStub::new();
    add_account
        .expect_add()
        .with(eq(AddAccountModel::new("Ana", "ana@x.com", "p1")))
        .returning(|_| {
            Ok(AccountModel {
                id: "1".to_string(),
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "hashed".to_string(),
            })
        });
    let sut = make_sut(accepting_email_validator(), add_account);

    let response = sut
        .handle(HttpRequest::new(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": "p1",
            "passwordConfirmation": "p1"
        })))
        .await;

    assert_eq!(response.status_code, StatusCode::OK);
    assert_eq!(
        response.body,
        HttpBody::Payload(json!({
            "id": "1",
            "name": "Ana",
            "email": "ana@x.com",
            "password": "hashed"
        }))
    );
}
