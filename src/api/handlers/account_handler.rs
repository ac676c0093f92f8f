//! Account handlers: signup and login.

use axum::{body::Bytes, extract::State, http::HeaderMap, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::adapter::{adapt_route, ErrorBody};
use crate::api::controllers::AccessTokenBody;
use crate::api::http::HttpResponse;
use crate::api::AppState;
use crate::domain::AccountModel;

/// Signup request (documentation only; controllers read the raw body)
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "p4ssw0rd")]
    pub password: String,
    #[serde(rename = "passwordConfirmation")]
    #[schema(example = "p4ssw0rd")]
    pub password_confirmation: String,
}

/// Login request (documentation only; controllers read the raw body)
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = "p4ssw0rd")]
    pub password: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Accounts",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account created", body = AccountModel),
        (status = 400, description = "Missing or invalid param", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResponse {
    adapt_route(state.signup_controller.as_ref(), headers, body).await
}

/// Exchange credentials for an access token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AccessTokenBody),
        (status = 400, description = "Missing or invalid param", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResponse {
    adapt_route(state.login_controller.as_ref(), headers, body).await
}
