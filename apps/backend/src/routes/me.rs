use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::Identity;
use crate::error::AppError;
use crate::extractors::{CurrentUser, MaybeUser};

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    pub user: Option<Identity>,
}

/// Caller's identity; only reachable through `RequireAuth`.
async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user.into_inner()))
}

async fn whoami(user: MaybeUser) -> Result<HttpResponse, AppError> {
    let user = user.into_inner();
    Ok(HttpResponse::Ok().json(WhoAmIResponse {
        authenticated: user.is_some(),
        user,
    }))
}

pub fn configure_me(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(me));
}

pub fn configure_whoami(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(whoami));
}
