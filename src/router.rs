//! Axum router construction and shared application state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::authn::{CredentialStore, PgCredentialStore};
use crate::handlers::{clients, login, register};
use crate::middleware::require_auth;
use crate::token::{Claims, TokenSigner};

/// State shared by every request handler.
///
/// The pool and the credential store are injected here once at startup; no
/// handler reaches for process-global state. `store` is a trait object so
/// tests can swap in a double without a database.
pub struct AppState {
    /// Shared connection pool for the profile endpoints.
    pub pool: PgPool,
    /// Credential lookup used by the login path.
    pub store: Arc<dyn CredentialStore>,
    /// Token signer shared by issuance and the authorization middleware.
    pub signer: TokenSigner,
}

impl AppState {
    /// Build production state: the credential store reads the `login` table
    /// through the same pool the profile endpoints use.
    #[must_use]
    pub fn new(pool: PgPool, signer: TokenSigner) -> Self {
        Self {
            store: Arc::new(PgCredentialStore::new(pool.clone())),
            pool,
            signer,
        }
    }
}

/// Shared, reference-counted application state.
pub type SharedState = Arc<AppState>;

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Response body for the authorized probe.
#[derive(Debug, Serialize)]
struct AuthorizedResponse {
    message: &'static str,
}

/// Build the Axum application router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    let protected = Router::new()
        .route("/", get(authorized_handler))
        .route_layer(middleware::from_fn_with_state(shared.clone(), require_auth));

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/login", post(login::login_handler))
        .route("/register", post(register::register_handler))
        .route("/clients", get(clients::list_clients_handler))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .with_state(shared)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// The middleware stashes verified claims in request extensions; extracting
/// them here fails the request with `500` if the route is ever wired up
/// without `require_auth`.
async fn authorized_handler(Extension(claims): Extension<Claims>) -> Json<AuthorizedResponse> {
    log::debug!("authorized probe for user {}", claims.id);
    Json(AuthorizedResponse {
        message: "Authorized",
    })
}
