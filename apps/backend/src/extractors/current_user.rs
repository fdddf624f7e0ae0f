use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::Identity;
use crate::error::AppError;

/// Identity attached by `RequireAuth`.
///
/// Extraction fails with 401 when no identity is present, which only
/// happens if the route is not behind a gate.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    pub fn into_inner(self) -> Identity {
        self.0
    }
}

impl Deref for CurrentUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();
        ready(identity.map(CurrentUser).ok_or_else(AppError::missing_token))
    }
}

/// Identity attached by `OptionalAuth`, if any. Never fails.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl MaybeUser {
    pub fn into_inner(self) -> Option<Identity> {
        self.0
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(MaybeUser(req.extensions().get::<Identity>().cloned())))
    }
}
