//! GET /clients — list all client profile records.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::error;

use crate::models::Client;
use crate::router::SharedState;

/// Handle `GET /clients` — return every client profile.
///
/// # Errors
///
/// Returns `500` on a database error.
pub async fn list_clients_handler(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Client>>, StatusCode> {
    let clients = sqlx::query_as::<_, Client>("SELECT id, full_name, email, age FROM clients")
        .fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("client listing failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(clients))
}
