//! Client registry API library.
#![warn(missing_docs, clippy::all, clippy::pedantic)]

/// Credential lookup and token issuance.
pub mod authn;
pub mod config;
pub mod db;
pub mod handlers;
/// Bearer-token extraction and the authorization middleware.
pub mod middleware;
pub mod models;
pub mod router;
/// Signed identity tokens.
pub mod token;
/// Request payload validation and normalization.
pub mod validate;
