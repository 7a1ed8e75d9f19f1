use axum::http::StatusCode;
use axum_test::TestServer;
use clientreg_api::router::{build_router, AppState};
use clientreg_api::token::TokenSigner;
use serde_json::json;

fn make_server() -> TestServer {
    let pool = sqlx::PgPool::connect_lazy("postgres://localhost:1/unreachable").expect("lazy pool");
    let state = AppState::new(pool, TokenSigner::new("test-secret", None));
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn register_with_malformed_email_returns_400() {
    // Rejected by validation before any database access, so the unreachable
    // pool is never touched.
    let server = make_server();

    let response = server
        .post("/register")
        .json(&json!({"full_name": "Ada", "email": "not-an-email", "age": "36"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "All fields are required"
    );
}

#[tokio::test]
async fn register_with_wrong_typed_field_returns_generic_400() {
    let server = make_server();

    let response = server
        .post("/register")
        .json(&json!({"full_name": "Ada", "email": "ada@example.com", "age": 36}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "All fields are required"
    );
}

#[tokio::test]
async fn register_without_reachable_db_returns_500() {
    let server = make_server();

    let response = server
        .post("/register")
        .json(&json!({"full_name": "Ada", "email": "ada@example.com", "age": "36"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn clients_without_reachable_db_returns_500() {
    let server = make_server();

    let response = server.get("/clients").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
