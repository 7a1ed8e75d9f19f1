//! Signed identity tokens (HS256 JWTs).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Case-normalized email of the authenticated user.
    pub email: String,
    /// Opaque user identifier.
    pub id: i64,
    /// Expiry as seconds since epoch. Absent when no TTL is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Signs and verifies identity tokens with a server-held secret.
///
/// Tokens are stateless: nothing about an issued token is stored server-side,
/// and verification needs only the secret.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Option<Duration>,
}

impl TokenSigner {
    /// Create a signer from the shared secret.
    ///
    /// When `ttl_secs` is `Some`, issued tokens carry an `exp` claim and
    /// verification enforces it; when `None`, tokens never expire.
    #[must_use]
    pub fn new(secret: &str, ttl_secs: Option<i64>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: ttl_secs.map(Duration::seconds),
        }
    }

    /// Issue a signed token binding `id` and `email`.
    ///
    /// # Errors
    ///
    /// Returns the underlying `jsonwebtoken` error if signing fails.
    pub fn sign(&self, id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            email: email.to_owned(),
            id,
            exp: self.ttl.map(|ttl| (Utc::now() + ttl).timestamp()),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature (and expiry, when a TTL is configured) and
    /// extract its claims.
    ///
    /// # Errors
    ///
    /// Returns the underlying `jsonwebtoken` error for tampered, malformed,
    /// or expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        if self.ttl.is_none() {
            validation.set_required_spec_claims::<&str>(&[]);
            validation.validate_exp = false;
        }
        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}
