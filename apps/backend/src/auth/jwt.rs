use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Claims carried by backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Account identifier (users.id)
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Why a presented token was not accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token malformed")]
    Malformed,
}

impl TokenError {
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Expired => "token_expired",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Malformed => "malformed_token",
        }
    }
}

/// Mint an HS256 access token for `sub` using the configured TTL.
pub fn mint_access_token(
    sub: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    mint_access_token_with_ttl(sub, now, security.token_ttl, security)
}

/// Mint an HS256 access token for `sub` expiring `ttl` after `now`.
pub fn mint_access_token_with_ttl(
    sub: &str,
    now: SystemTime,
    ttl: Duration,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let ttl_secs = i64::try_from(ttl.as_secs())
        .map_err(|_| AppError::internal("Token TTL out of range"))?;

    let claims = Claims {
        sub: sub.to_string(),
        iat,
        exp: iat.saturating_add(ttl_secs),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a token's signature and expiry and return its claims.
///
/// The algorithm is pinned to the configured one and expiry is checked
/// without leeway.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })
}
