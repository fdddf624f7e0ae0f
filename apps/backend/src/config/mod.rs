//! Process configuration, read once at startup and passed down explicitly.

pub mod app;
pub mod ttl;

pub use app::{AppConfig, StoreConfig};
pub use ttl::{parse_ttl, DEFAULT_TOKEN_TTL};
