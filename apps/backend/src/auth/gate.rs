//! Verification pipeline shared by the mandatory and optional gates.
//!
//! extract bearer → verify signature/expiry → look up account → Identity.
//! Lookup never runs for a token that failed verification.

use std::panic::AssertUnwindSafe;

use actix_web::http::header::HeaderValue;
use futures_util::FutureExt;
use thiserror::Error;

use super::identity::Identity;
use super::jwt::{verify_access_token, TokenError};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;
use crate::store::{AccountStore, StoreError};

/// Closed set of reasons a request is not authenticated.
///
/// `UnknownSubject` covers both "no such account" and "store answered with
/// an error". It renders exactly like a forged token so callers cannot tell
/// a deleted account from a bad credential.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("no bearer token supplied")]
    MissingToken,
    #[error("token rejected: {0}")]
    InvalidToken(TokenError),
    #[error("token subject did not resolve to an account")]
    UnknownSubject,
    #[error("unexpected failure while authenticating: {0}")]
    Unexpected(String),
}

impl AuthFailure {
    /// Short machine-readable reason for security logs.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthFailure::MissingToken => "missing_token",
            AuthFailure::InvalidToken(e) => e.reason(),
            AuthFailure::UnknownSubject => "unknown_subject",
            AuthFailure::Unexpected(_) => "unexpected",
        }
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::MissingToken => AppError::missing_token(),
            AuthFailure::UnknownSubject => AppError::invalid_token(),
            AuthFailure::InvalidToken(_) | AuthFailure::Unexpected(_) => {
                AppError::token_expired_or_invalid()
            }
        }
    }
}

/// Token from an `Authorization` value: its second whitespace-delimited segment.
///
/// The scheme word is not inspected. Non-UTF-8 values yield `None`.
pub fn extract_bearer(header: Option<&HeaderValue>) -> Option<&str> {
    header?.to_str().ok()?.split_whitespace().nth(1)
}

/// Run the full verification pipeline for one request.
pub async fn authenticate(
    token: Option<&str>,
    security: &SecurityConfig,
    accounts: &dyn AccountStore,
) -> Result<Identity, AuthFailure> {
    let token = token.ok_or(AuthFailure::MissingToken)?;
    let claims = verify_access_token(token, security).map_err(AuthFailure::InvalidToken)?;

    let lookup = AssertUnwindSafe(accounts.find_account_by_id(&claims.sub))
        .catch_unwind()
        .await
        .map_err(|_| AuthFailure::Unexpected("account store panicked".to_string()))?;

    match lookup {
        Ok(Some(record)) => Ok(Identity::from(record)),
        Ok(None) | Err(StoreError::Query { .. }) => Err(AuthFailure::UnknownSubject),
        Err(StoreError::Transport(cause)) => Err(AuthFailure::Unexpected(cause)),
    }
}
