use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::store::{AccountStore, SupabaseClient};

/// Builder for AppState (used in both tests and main).
///
/// Both the signing secret and the account store must be supplied; there
/// is no built-in fallback for either.
pub struct StateBuilder {
    security_config: Option<SecurityConfig>,
    accounts: Option<Arc<dyn AccountStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: None,
            accounts: None,
        }
    }

    /// Security settings and hosted store client from a resolved config.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let security = SecurityConfig::new(config.jwt_secret.as_bytes()).with_ttl(config.token_ttl);
        let client = SupabaseClient::new(&config.store)?;
        Ok(Self::new().with_security(security).with_accounts(Arc::new(client)))
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    pub fn with_accounts(mut self, accounts: Arc<dyn AccountStore>) -> Self {
        self.accounts = Some(accounts);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security_config
            .ok_or_else(|| AppError::config("a signing secret is required"))?;
        let accounts = self
            .accounts
            .ok_or_else(|| AppError::config("an account store is required"))?;
        Ok(AppState::new(security, accounts))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::{build_state, StateBuilder};
    use crate::config::{AppConfig, StoreConfig};
    use crate::error::AppError;
    use crate::state::security_config::SecurityConfig;
    use crate::store::InMemoryAccountStore;

    #[test]
    fn build_requires_a_store() {
        let result = build_state()
            .with_security(SecurityConfig::new("s".as_bytes()))
            .build();
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    fn build_requires_a_signing_secret() {
        let result = build_state()
            .with_accounts(Arc::new(InMemoryAccountStore::new()))
            .build();
        match result {
            Err(err @ AppError::Config { .. }) => {
                assert!(err.detail().contains("signing secret"));
            }
            Err(other) => panic!("expected config error, got {other:?}"),
            Ok(_) => panic!("state built without a signing secret"),
        }
    }

    #[test]
    fn build_with_memory_store() {
        let state = build_state()
            .with_security(SecurityConfig::new("s".as_bytes()))
            .with_accounts(Arc::new(InMemoryAccountStore::new()))
            .build()
            .unwrap();
        assert_eq!(state.security.token_ttl, crate::config::DEFAULT_TOKEN_TTL);
    }

    #[test]
    fn from_config_carries_secret_and_ttl() {
        let config = AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            jwt_secret: "from-config".into(),
            token_ttl: Duration::from_secs(600),
            store: StoreConfig {
                url: "https://proj.supabase.co".into(),
                service_key: "service".into(),
                timeout: Duration::from_secs(2),
            },
        };
        let state = StateBuilder::from_config(&config).unwrap().build().unwrap();
        assert_eq!(state.security.jwt_secret, b"from-config");
        assert_eq!(state.security.token_ttl, Duration::from_secs(600));
    }
}
