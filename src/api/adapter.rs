//! Axum route adapter: HTTP request → controller → HTTP response.

use axum::{
    body::Bytes,
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::http::{HttpBody, HttpRequest, HttpResponse};
use super::protocols::Controller;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Missing param: email")]
    pub error: String,
}

/// Build the request envelope and run the controller.
///
/// Bodies that are empty or not JSON become an empty object, so the
/// controller reports the first missing field instead of the transport
/// rejecting the request.
pub async fn adapt_route(
    controller: &dyn Controller,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResponse {
    let body = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "request body is not JSON, treating it as empty");
            Value::Object(Map::new())
        })
    };

    controller
        .handle(HttpRequest::new(body).with_headers(headers))
        .await
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = self.status_code;
        match self.body {
            HttpBody::Payload(payload) if status.is_success() => {
                (status, Json(payload)).into_response()
            }
            HttpBody::Error(error) => {
                let body = ErrorBody {
                    error: error.to_string(),
                };
                (status, Json(body)).into_response()
            }
            HttpBody::Payload(_) => {
                let body = ErrorBody {
                    error: status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
