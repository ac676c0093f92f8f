//! Repository and end-to-end tests against an in-memory SQLite database.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use sea_orm::{ConnectOptions, EntityTrait};
use serde_json::{json, Value};
use tower::ServiceExt;

use account_api::api::{create_router, AppState};
use account_api::config::{Config, DEV_JWT_SECRET};
use account_api::domain::AddAccountModel;
use account_api::errors::AppError;
use account_api::infra::repositories::entities::error_log;
use account_api::infra::{AccountStore, Database, JwtAdapter, LogStore};
use account_api::services::{AddAccountRepository, LoadAccountByEmailRepository, LogErrorRepository};

async fn setup_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let connection = sea_orm::Database::connect(options).await.unwrap();

    let database = Database::from_connection(connection);
    database.run_migrations().await.unwrap();
    database
}

// =============================================================================
// Migrations
// =============================================================================

#[tokio::test]
async fn test_migrations_are_all_applied() {
    let database = setup_database().await;

    let status = database.migration_status().await.unwrap();

    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
    database.ping().await.unwrap();
}

// =============================================================================
// AccountStore
// =============================================================================

#[tokio::test]
async fn test_add_returns_account_with_generated_id() {
    let database = setup_database().await;
    let store = AccountStore::new(database.get_connection());

    let account = store
        .add(AddAccountModel::new("Ana", "ana@x.com", "hashed_password"))
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&account.id).is_ok());
    assert_eq!(account.name, "Ana");
    assert_eq!(account.email, "ana@x.com");
    assert_eq!(account.password, "hashed_password");
}

#[tokio::test]
async fn test_load_by_email_finds_stored_account() {
    let database = setup_database().await;
    let store = AccountStore::new(database.get_connection());
    let added = store
        .add(AddAccountModel::new("Ana", "ana@x.com", "hashed_password"))
        .await
        .unwrap();

    let loaded = store.load_by_email("ana@x.com").await.unwrap();

    assert_eq!(loaded, Some(added));
}

#[tokio::test]
async fn test_load_by_email_returns_none_for_unknown_email() {
    let database = setup_database().await;
    let store = AccountStore::new(database.get_connection());

    let loaded = store.load_by_email("nobody@x.com").await.unwrap();

    assert!(loaded.is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_a_database_error() {
    let database = setup_database().await;
    let store = AccountStore::new(database.get_connection());
    store
        .add(AddAccountModel::new("Ana", "ana@x.com", "h1"))
        .await
        .unwrap();

    let result = store
        .add(AddAccountModel::new("Other Ana", "ana@x.com", "h2"))
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
}

// =============================================================================
// LogStore
// =============================================================================

#[tokio::test]
async fn test_log_error_persists_stack() {
    let database = setup_database().await;
    let store = LogStore::new(database.get_connection());

    store.log_error("Internal error: disk full").await.unwrap();

    let rows = error_log::Entity::find()
        .all(database.connection())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stack, "Internal error: disk full");
}

// =============================================================================
// End to end
// =============================================================================

async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn wait_for_error_logs(database: &Database, expected: usize) -> Vec<error_log::Model> {
    for _ in 0..100 {
        let rows = error_log::Entity::find()
            .all(database.connection())
            .await
            .unwrap();
        if rows.len() >= expected {
            return rows;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("error log was not written");
}

#[tokio::test]
async fn test_signup_then_login_flow() {
    let database = Arc::new(setup_database().await);
    let config = Config::new("sqlite::memory:", DEV_JWT_SECRET).unwrap();
    let app = create_router(AppState::from_config(database.clone(), &config));

    let (status, account) = post_json(
        &app,
        "/api/signup",
        json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": "p1",
            "passwordConfirmation": "p1"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(account["name"], "Ana");
    assert_eq!(account["email"], "ana@x.com");
    assert_ne!(account["password"], "p1");

    let (status, body) = post_json(
        &app,
        "/api/login",
        json!({ "email": "ana@x.com", "password": "p1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["accessToken"].as_str().unwrap();
    let claims = JwtAdapter::new(&config).decrypt(token).unwrap();
    assert_eq!(claims.sub, account["id"].as_str().unwrap());

    let (status, body) = post_json(
        &app,
        "/api/login",
        json!({ "email": "ana@x.com", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));

    let (status, _) = post_json(
        &app,
        "/api/login",
        json!({ "email": "nobody@x.com", "password": "p1" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_signup_is_logged_as_server_error() {
    let database = Arc::new(setup_database().await);
    let config = Config::new("sqlite::memory:", DEV_JWT_SECRET).unwrap();
    let app = create_router(AppState::from_config(database.clone(), &config));
    let body = json!({
        "name": "Ana",
        "email": "ana@x.com",
        "password": "p1",
        "passwordConfirmation": "p1"
    });

    let (status, _) = post_json(&app, "/api/signup", body.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = post_json(&app, "/api/signup", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response, json!({ "error": "Internal server error" }));

    let rows = wait_for_error_logs(&database, 1).await;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].stack.starts_with("Database error"));
}
