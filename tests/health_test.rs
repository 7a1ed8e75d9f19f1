use axum::http::StatusCode;
use axum_test::TestServer;
use clientreg_api::router::{build_router, AppState};
use clientreg_api::token::TokenSigner;

#[tokio::test]
async fn health_returns_200() {
    // A lazy pool never connects; the health endpoint does not use the DB.
    let pool = sqlx::PgPool::connect_lazy("postgres://localhost:1/unreachable").expect("lazy pool");
    let state = AppState::new(pool, TokenSigner::new("test-secret", None));
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
