//! Credential verification and token issuance.
//!
//! The store is an injected trait object rather than a module-level pool
//! handle, so tests can substitute an in-memory double.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::CredentialRecord;
use crate::token::TokenSigner;
use crate::validate::ValidatedCredentials;

/// Read-only lookup of credential records by normalized email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch at most one record whose email equals `email` exactly.
    ///
    /// # Errors
    ///
    /// Returns the underlying store error if the lookup cannot be performed.
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, sqlx::Error>;
}

/// Credential store backed by the `login` table.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Wrap a shared connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, sqlx::Error> {
        // Parameter binding keeps metacharacters in the email literal.
        sqlx::query_as::<_, CredentialRecord>(
            "SELECT id, email, password_hash FROM login WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }
}

/// Errors from the authentication flow.
///
/// Unknown email and wrong password collapse into one variant on purpose:
/// the caller must not be able to tell them apart.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email not found or password mismatch.
    #[error("Email or password did not match")]
    InvalidCredentials,
    /// The credential store failed.
    #[error("credential store error: {0}")]
    Store(#[from] sqlx::Error),
    /// The stored hash could not be parsed or compared.
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    /// Token signing failed.
    #[error("token signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Authenticate validated credentials and issue a signed token.
///
/// One read-only lookup, a salt-aware bcrypt comparison, and token issuance.
/// The credential record is never written.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] for an unknown email or a
/// password mismatch, and the other variants for store, hash, or signing
/// failures.
pub async fn authenticate(
    store: &dyn CredentialStore,
    signer: &TokenSigner,
    creds: &ValidatedCredentials,
) -> Result<String, AuthError> {
    let record = store
        .find_by_email(&creds.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !bcrypt::verify(&creds.password, &record.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(signer.sign(record.id, &record.email)?)
}
