use std::env;
use std::fmt;
use std::time::Duration;

use super::ttl::{parse_ttl, DEFAULT_TOKEN_TTL};
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the hosted account store.
#[derive(Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Service-role key sent as `apikey` and bearer credential
    pub service_key: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout: Duration,
}

/// Everything the process needs, resolved once in `main`.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub store: StoreConfig,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("service_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("store", &self.store)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. Fails on the first missing
    /// required key (`JWT_SECRET`, `SUPABASE_URL`, `SUPABASE_SERVICE_KEY`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let must = |key: &str| {
            get(key).ok_or_else(|| AppError::config(format!("{key} must be set")))
        };

        let jwt_secret = must("JWT_SECRET")?;
        let url = must("SUPABASE_URL")?;
        let service_key = must("SUPABASE_SERVICE_KEY")?;

        let token_ttl = match get("JWT_EXPIRES_IN") {
            Some(raw) => parse_ttl(&raw)?,
            None => DEFAULT_TOKEN_TTL,
        };

        let timeout = match get("SUPABASE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    AppError::config(format!("SUPABASE_TIMEOUT_SECS must be an integer, got '{raw}'"))
                })?,
            None => DEFAULT_STORE_TIMEOUT,
        };

        let host = get("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            jwt_secret,
            token_ttl,
            store: StoreConfig {
                url: url.trim_end_matches('/').to_string(),
                service_key,
                timeout,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::AppConfig;
    use crate::config::DEFAULT_TOKEN_TTL;
    use crate::error::AppError;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("JWT_SECRET", "s3cret"),
        ("SUPABASE_URL", "https://example.supabase.co/"),
        ("SUPABASE_SERVICE_KEY", "service-key"),
    ];

    #[test]
    fn defaults_apply() {
        let cfg = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.token_ttl, DEFAULT_TOKEN_TTL);
        assert_eq!(cfg.store.url, "https://example.supabase.co");
        assert_eq!(cfg.store.timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_apply() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend_from_slice(&[
            ("JWT_EXPIRES_IN", "12h"),
            ("BACKEND_PORT", "8080"),
            ("BACKEND_HOST", "127.0.0.1"),
            ("SUPABASE_TIMEOUT_SECS", "3"),
        ]);
        let cfg = AppConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(cfg.token_ttl, Duration::from_secs(12 * 3600));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.store.timeout, Duration::from_secs(3));
    }

    #[test]
    fn missing_secret_fails_fast() {
        let pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "JWT_SECRET")
            .collect();
        match AppConfig::from_lookup(lookup(&pairs)) {
            Err(AppError::Config { detail }) => assert_eq!(detail, "JWT_SECRET must be set"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_store_key_counts_as_missing() {
        let mut pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "SUPABASE_SERVICE_KEY")
            .collect();
        pairs.push(("SUPABASE_SERVICE_KEY", "   "));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&pairs)),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn debug_hides_secrets() {
        let cfg = AppConfig::from_lookup(lookup(REQUIRED)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("service-key"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("https://example.supabase.co"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("BACKEND_PORT", "not-a-port"));
        assert!(AppConfig::from_lookup(lookup(&pairs)).is_err());
    }
}
