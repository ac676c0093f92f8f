//! Application route configuration.

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::account_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::API_PREFIX;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(API_PREFIX, account_routes())
        // Global middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )),
        )
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match &state.database {
        None => ServiceStatus {
            status: "not configured",
            error: None,
        },
        Some(database) => match database.ping().await {
            Ok(_) => ServiceStatus {
                status: "healthy",
                error: None,
            },
            Err(e) => ServiceStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        },
    };

    if database.status == "unhealthy" {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "degraded",
                database,
            }),
        );
    }

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            database,
        }),
    )
}
