//! POST /register — insert a client profile record.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::Serialize;

use crate::handlers::{bad_request, ALL_FIELDS_REQUIRED};
use crate::router::SharedState;
use crate::validate::{validate_registration, RegisterRequest};

/// Response body for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message.
    pub message: &'static str,
}

/// Handle `POST /register` — validate and insert a client profile.
///
/// The body is deserialized here rather than by the extractor so wrong-typed
/// fields collapse into the generic `400`. Registration creates no
/// credential record; those are provisioned out of band. Returns `201` on
/// success, `400` on validation failure, and an empty `500` on a database
/// error.
pub async fn register_handler(
    State(state): State<SharedState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let Ok(raw) = serde_json::from_value::<RegisterRequest>(body) else {
        return bad_request(ALL_FIELDS_REQUIRED);
    };
    let reg = match validate_registration(raw) {
        Ok(reg) => reg,
        Err(_) => return bad_request(ALL_FIELDS_REQUIRED),
    };

    let result = sqlx::query("INSERT INTO clients (full_name, email, age) VALUES ($1, $2, $3)")
        .bind(&reg.full_name)
        .bind(&reg.email)
        .bind(&reg.age)
        .execute(&state.pool)
        .await;

    match result {
        Ok(_) => (
            StatusCode::CREATED,
            Json(RegisterResponse {
                message: "Registration successful",
            }),
        )
            .into_response(),
        Err(e) => {
            error!("client insert failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::validate::RegisterRequest;

    #[test]
    fn register_request_deserialises() {
        let body = serde_json::json!({"full_name": "Ada", "email": "ada@example.com", "age": "36"});
        let r: RegisterRequest = serde_json::from_value(body).unwrap();
        assert_eq!(r.full_name.as_deref(), Some("Ada"));
    }
}
