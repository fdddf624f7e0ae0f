#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;
pub mod web;

// Re-exports for public API
pub use auth::{authenticate, mint_access_token, verify_access_token, AuthFailure, Claims, Identity};
pub use config::AppConfig;
pub use error::AppError;
pub use extractors::{CurrentUser, MaybeUser};
pub use middleware::{OptionalAuth, RequestTrace, RequireAuth, StructuredLogger, TraceSpan};
pub use state::{build_state, AppState, SecurityConfig};
pub use store::{AccountRecord, AccountStore, InMemoryAccountStore, StoreError, SupabaseClient};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    auth_test_support::logging::init();
}
