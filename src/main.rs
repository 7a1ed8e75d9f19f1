//! Client registry API server entry point.

use clientreg_api::config::ApiConfig;
use clientreg_api::db::connect_and_migrate;
use clientreg_api::router::{build_router, AppState};
use clientreg_api::token::TokenSigner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ApiConfig::from_env()?;
    let pool = connect_and_migrate(&config.database_url).await?;
    let signer = TokenSigner::new(&config.jwt_secret, config.token_ttl_secs);
    let app = build_router(AppState::new(pool, signer));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
