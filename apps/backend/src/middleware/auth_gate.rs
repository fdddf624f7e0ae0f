//! Verification gate middleware.
//!
//! `RequireAuth` rejects any request that does not end with an `Identity`;
//! `OptionalAuth` attaches one when it can and otherwise lets the request
//! through anonymously. Both store the identity in request extensions,
//! where `CurrentUser` / `MaybeUser` pick it up.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::{authenticate, extract_bearer, AuthFailure};
use crate::error::AppError;
use crate::logging::security::{self, GateKind};
use crate::state::app_state::AppState;

/// Mandatory gate: 401/403 unless the caller is authenticated.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequireAuth;

/// Optional gate: never rejects.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptionalAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            gate: GateKind::Mandatory,
        }))
    }
}

impl<S, B> Transform<S, ServiceRequest> for OptionalAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
            gate: GateKind::Optional,
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
    gate: GateKind,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = self.gate;

        Box::pin(async move {
            let token = extract_bearer(req.headers().get(header::AUTHORIZATION)).map(str::to_owned);
            let app_state = req.app_data::<web::Data<AppState>>().cloned();

            let outcome = match app_state {
                Some(state) => {
                    authenticate(token.as_deref(), &state.security, state.accounts.as_ref()).await
                }
                None => Err(AuthFailure::Unexpected("AppState not available".to_string())),
            };

            match outcome {
                Ok(identity) => {
                    security::auth_accepted(gate, &identity);
                    req.extensions_mut().insert(identity);
                }
                Err(failure) => match gate {
                    GateKind::Mandatory => {
                        security::auth_rejected(&failure);
                        let response = req.error_response(AppError::from(failure));
                        return Ok(response.map_into_right_body());
                    }
                    GateKind::Optional => security::auth_downgraded(&failure),
                },
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
