use actix_web::web;

use crate::middleware::{OptionalAuth, RequireAuth};

pub mod auth;
pub mod health;
pub mod me;

/// Register every route with its gate.
///
/// Request tracing and logging middleware are applied by the caller
/// (`main.rs` or a test app) around the whole `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Validation helpers: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Authenticated only: /api/me
    cfg.service(
        web::scope("/api/me")
            .wrap(RequireAuth)
            .configure(me::configure_me),
    );

    // Identity when available: /api/whoami
    cfg.service(
        web::scope("/api/whoami")
            .wrap(OptionalAuth)
            .configure(me::configure_whoami),
    );
}
