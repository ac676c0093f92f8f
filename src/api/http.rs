//! Request/response envelopes and the helpers that shape responses.
//!
//! Every status code a controller returns is assigned here.

use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;

use super::errors::PresentationError;

/// Inbound request envelope.
///
/// The body is whatever JSON the client sent; controllers read fields
/// defensively and never assume a shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpRequest {
    pub body: Value,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Body field, if present and truthy.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|value| is_truthy(value))
    }

    /// Body field rendered as text. Non-string values use their JSON form.
    pub fn field_text(&self, name: &str) -> String {
        match self.body.get(name) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// First field of `required` that is missing or falsy, in list order.
    pub fn first_missing_field(&self, required: &[&'static str]) -> Option<&'static str> {
        required
            .iter()
            .copied()
            .find(|name| self.field(name).is_none())
    }
}

/// JSON truthiness: null, false, 0 and "" count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Response body: a success payload or a presentation error.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    Payload(Value),
    Error(PresentationError),
}

/// Outbound response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: HttpBody,
}

impl HttpResponse {
    /// The error in the body, if any.
    pub fn error(&self) -> Option<&PresentationError> {
        match &self.body {
            HttpBody::Error(error) => Some(error),
            HttpBody::Payload(_) => None,
        }
    }

    /// Cause description when this is a `500` carrying a server error.
    pub fn server_error_stack(&self) -> Option<&str> {
        if self.status_code != StatusCode::INTERNAL_SERVER_ERROR {
            return None;
        }
        self.error().and_then(PresentationError::stack)
    }
}

/// `400` with the given validation error.
pub fn bad_request(error: PresentationError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: HttpBody::Error(error),
    }
}

/// `401` with the unauthorized marker.
pub fn unauthorized() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::UNAUTHORIZED,
        body: HttpBody::Error(PresentationError::Unauthorized),
    }
}

/// `500` describing `cause`, including its source chain.
pub fn server_error<E>(cause: &E) -> HttpResponse
where
    E: std::error::Error + ?Sized,
{
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: HttpBody::Error(PresentationError::server(describe(cause))),
    }
}

/// `200` with the given payload.
pub fn ok(payload: Value) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: HttpBody::Payload(payload),
    }
}

fn describe<E>(cause: &E) -> String
where
    E: std::error::Error + ?Sized,
{
    let mut description = cause.to_string();
    let mut source = cause.source();
    while let Some(inner) = source {
        description.push_str(": ");
        description.push_str(&inner.to_string());
        source = inner.source();
    }
    description
}
