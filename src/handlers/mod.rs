//! HTTP request handlers, one module per endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub mod clients;
pub mod login;
pub mod register;

/// Generic message shown for any validation failure. Never names the field
/// that failed.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Unified message for unknown email and wrong password. Keeping them
/// indistinguishable prevents user enumeration.
pub const CREDENTIALS_MISMATCH: &str = "Email or password did not match";

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: &'static str,
}

/// Render a `400 Bad Request` with a JSON error body.
pub(crate) fn bad_request(message: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
}
