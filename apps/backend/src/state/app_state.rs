use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::store::AccountStore;

/// Application state shared by every worker
#[derive(Clone)]
pub struct AppState {
    /// Token signing settings
    pub security: SecurityConfig,
    /// Account lookups for the verification gates
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(security: SecurityConfig, accounts: Arc<dyn AccountStore>) -> Self {
        Self { security, accounts }
    }
}
