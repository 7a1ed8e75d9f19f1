//! Request payload validation and normalization.
//!
//! Pure functions over their input: no database access, no side effects.
//! Handlers collapse every variant of [`ValidationError`] into one generic
//! response so callers never learn which field failed.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by payload validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("missing required field")]
    MissingField,
    /// The email field does not parse as an email address.
    #[error("malformed email address")]
    InvalidEmail,
    /// The password field is present but empty.
    #[error("empty password")]
    EmptyPassword,
}

/// Raw request body for `POST /login`.
///
/// Fields are optional so that a missing key reaches the validator instead
/// of failing JSON extraction with a different status code.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address to authenticate as.
    pub email: Option<String>,
    /// Plaintext secret.
    pub password: Option<String>,
}

/// Normalized credentials ready for authentication.
///
/// In-memory only; lives for the duration of one request and is never
/// persisted or logged.
#[derive(Debug, Clone)]
pub struct ValidatedCredentials {
    /// Trimmed, lowercased email.
    pub email: String,
    /// Plaintext secret, passed through unchanged.
    pub password: String,
}

/// Raw request body for `POST /register`. Every field is optional.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Client's full name.
    pub full_name: Option<String>,
    /// Client's contact email.
    pub email: Option<String>,
    /// Client's age as a free-form string.
    pub age: Option<String>,
}

/// Normalized registration payload.
#[derive(Debug)]
pub struct ValidatedRegistration {
    /// Trimmed full name.
    pub full_name: Option<String>,
    /// Trimmed, lowercased email.
    pub email: Option<String>,
    /// Age, passed through unchanged.
    pub age: Option<String>,
}

/// Plausibility check for an email address: one `@`, non-empty local part,
/// dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
}

/// Normalize an email: trim surrounding whitespace and lowercase.
fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate a login payload.
///
/// On success the email is trimmed and lowercased; the password is passed
/// through byte-for-byte. Nothing partially normalized escapes on failure.
///
/// # Errors
///
/// Returns [`ValidationError`] if either field is missing, the email is
/// malformed, or the password is empty.
pub fn validate_login(raw: LoginRequest) -> Result<ValidatedCredentials, ValidationError> {
    let email = raw.email.ok_or(ValidationError::MissingField)?;
    let password = raw.password.ok_or(ValidationError::MissingField)?;

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }

    Ok(ValidatedCredentials { email, password })
}

/// Validate a registration payload.
///
/// All fields are optional; present fields are normalized the same way the
/// login payload is.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidEmail`] if an email is supplied but
/// malformed.
pub fn validate_registration(
    raw: RegisterRequest,
) -> Result<ValidatedRegistration, ValidationError> {
    let email = match raw.email {
        Some(e) => {
            let e = normalize_email(&e);
            if !is_valid_email(&e) {
                return Err(ValidationError::InvalidEmail);
            }
            Some(e)
        }
        None => None,
    };

    Ok(ValidatedRegistration {
        full_name: raw.full_name.map(|n| n.trim().to_owned()),
        email,
        age: raw.age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            email: email.map(str::to_owned),
            password: password.map(str::to_owned),
        }
    }

    #[test]
    fn missing_email_rejected() {
        let result = validate_login(login(None, Some("secret123")));
        assert_eq!(result.unwrap_err(), ValidationError::MissingField);
    }

    #[test]
    fn missing_password_rejected() {
        let result = validate_login(login(Some("user@example.com"), None));
        assert_eq!(result.unwrap_err(), ValidationError::MissingField);
    }

    #[test]
    fn empty_password_rejected() {
        let result = validate_login(login(Some("user@example.com"), Some("")));
        assert_eq!(result.unwrap_err(), ValidationError::EmptyPassword);
    }

    #[test]
    fn malformed_emails_rejected() {
        for bad in ["", "no-at-sign", "@example.com", "user@", "user@nodot", "a@.com", "a@b.com."] {
            let result = validate_login(login(Some(bad), Some("secret123")));
            assert!(result.is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let creds = validate_login(login(Some("  USER@Example.COM "), Some("secret123"))).unwrap();
        assert_eq!(creds.email, "user@example.com");
    }

    #[test]
    fn password_passes_through_unchanged() {
        let creds = validate_login(login(Some("user@example.com"), Some("  P@ss  "))).unwrap();
        assert_eq!(creds.password, "  P@ss  ");
    }

    #[test]
    fn registration_fields_all_optional() {
        let reg = validate_registration(RegisterRequest {
            full_name: None,
            email: None,
            age: None,
        })
        .unwrap();
        assert!(reg.full_name.is_none());
        assert!(reg.email.is_none());
    }

    #[test]
    fn registration_normalizes_present_fields() {
        let reg = validate_registration(RegisterRequest {
            full_name: Some("  Ada Lovelace ".to_owned()),
            email: Some(" Ada@Example.com".to_owned()),
            age: Some("36".to_owned()),
        })
        .unwrap();
        assert_eq!(reg.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(reg.email.as_deref(), Some("ada@example.com"));
        assert_eq!(reg.age.as_deref(), Some("36"));
    }

    #[test]
    fn registration_rejects_malformed_email() {
        let result = validate_registration(RegisterRequest {
            full_name: None,
            email: Some("not-an-email".to_owned()),
            age: None,
        });
        assert_eq!(result.unwrap_err(), ValidationError::InvalidEmail);
    }
}
