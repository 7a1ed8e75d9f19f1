//! Database row and response models.

use serde::Serialize;

/// A stored credential record from the `login` table.
///
/// Provisioned out of band; the login path only reads it. The hash is a
/// bcrypt digest, never the plaintext secret.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRecord {
    /// Opaque user identifier.
    pub id: i64,
    /// Case-normalized email, unique across records.
    pub email: String,
    /// Salted one-way hash of the user's secret.
    pub password_hash: String,
}

/// A client profile record from the `clients` table.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Client {
    /// Row identifier.
    pub id: i64,
    /// Client's full name, if supplied at registration.
    pub full_name: Option<String>,
    /// Client's contact email, if supplied at registration.
    pub email: Option<String>,
    /// Client's age as a free-form string, if supplied at registration.
    pub age: Option<String>,
}
