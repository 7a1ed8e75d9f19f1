//! API server configuration loaded from environment variables.

use std::env;

use thiserror::Error;

/// Errors during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    Missing(String),
    /// An environment variable is set to an unparseable value.
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// API server runtime configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// TCP address to bind (e.g. `0.0.0.0:8080`).
    pub bind_addr: String,
    /// Secret key used to sign and verify identity tokens.
    pub jwt_secret: String,
    /// Token lifetime in seconds. When unset, issued tokens carry no expiry.
    pub token_ttl_secs: Option<i64>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if `DATABASE_URL` or `JWT_SECRET` is
    /// not set, or [`ConfigError::Invalid`] if `TOKEN_TTL_SECS` is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_ttl_secs = match env::var("TOKEN_TTL_SECS") {
            Ok(raw) => Some(
                raw.parse::<i64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::Invalid("TOKEN_TTL_SECS".to_owned(), raw))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_owned()))?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned()),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_owned()))?,
            token_ttl_secs,
        })
    }
}
