//! Token helpers for tests

use std::time::{Duration, SystemTime};

use campus_auth::auth::{mint_access_token, mint_access_token_with_ttl};
use campus_auth::SecurityConfig;

/// Bearer token for `sub` with the configured lifetime
pub fn mint_test_token(sub: &str, sec: &SecurityConfig) -> String {
    mint_access_token(sub, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full `Authorization` header value for `sub`
pub fn bearer_header(sub: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(sub, sec))
}

/// Token issued two hours ago with a one-hour lifetime
pub fn mint_expired_token(sub: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    mint_access_token_with_ttl(sub, issued, Duration::from_secs(60 * 60), sec)
        .expect("should mint expired token successfully")
}
