#![allow(dead_code)]

pub mod auth;
pub mod stores;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use campus_auth::middleware::RequestTrace;
use campus_auth::store::{AccountRecord, AccountStore};
use campus_auth::{build_state, routes, AppState, SecurityConfig};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

pub fn student_account() -> AccountRecord {
    AccountRecord {
        id: "20123456".to_string(),
        email: Some("20123456@fudan.edu.cn".to_string()),
        name: Some("Lin Xiaoming".to_string()),
        role: Some("student".to_string()),
    }
}

pub fn test_state(accounts: Arc<dyn AccountStore>) -> AppState {
    build_state()
        .with_security(test_security())
        .with_accounts(accounts)
        .build()
        .expect("test state should build")
}

/// Full route table wrapped in request tracing, as `main` wires it.
pub async fn init_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
