use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::config::DEFAULT_TOKEN_TTL;

/// Signing settings shared by token issuance and verification
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm (HS256)
    pub algorithm: Algorithm,
    /// Lifetime of newly issued tokens
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a SecurityConfig with the given secret and the default TTL
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
