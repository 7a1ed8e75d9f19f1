//! POST /login — credential verification and token issuance.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

use crate::authn::{authenticate, AuthError};
use crate::handlers::{bad_request, ALL_FIELDS_REQUIRED, CREDENTIALS_MISMATCH};
use crate::router::SharedState;
use crate::validate::{validate_login, LoginRequest};

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// Signed identity token for the authenticated user.
    pub token: String,
}

/// Handle `POST /login` — validate, look up, compare, issue.
///
/// The body is taken as an arbitrary JSON value and deserialized here, so a
/// wrong-typed field gets the same generic `400` as a missing one instead of
/// an extractor rejection naming the field. Returns `400` with one unified
/// message for unknown email or wrong password, and an empty `500` for
/// store, hash, or signing failures. The request body is never logged; it
/// carries the plaintext secret.
pub async fn login_handler(
    State(state): State<SharedState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let Ok(raw) = serde_json::from_value::<LoginRequest>(body) else {
        return bad_request(ALL_FIELDS_REQUIRED);
    };
    let creds = match validate_login(raw) {
        Ok(creds) => creds,
        Err(_) => return bad_request(ALL_FIELDS_REQUIRED),
    };

    match authenticate(state.store.as_ref(), &state.signer, &creds).await {
        Ok(token) => (StatusCode::OK, Json(TokenResponse { token })).into_response(),
        Err(AuthError::InvalidCredentials) => bad_request(CREDENTIALS_MISMATCH),
        Err(e) => {
            error!("login failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
