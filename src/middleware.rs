//! Bearer-token extraction and the authorization middleware.

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::router::SharedState;

/// Extract the raw token from an `Authorization: Bearer <token>` header value.
#[must_use]
pub fn extract_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Require a valid signed token; insert its claims into request extensions.
///
/// # Errors
///
/// Returns `401` when the header is missing, not a bearer token, or the
/// token fails verification.
pub async fn require_auth(
    State(state): State<SharedState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let token = extract_bearer(header).ok_or(StatusCode::UNAUTHORIZED)?;
    let claims = state
        .signer
        .verify(token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
