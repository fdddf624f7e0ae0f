use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::validation::{check_registration, RegistrationInput};

/// Pre-validate signup fields. 200 with per-field results, or 400 naming
/// the first failing field.
async fn validate(body: web::Json<RegistrationInput>) -> Result<HttpResponse, AppError> {
    let report = check_registration(&body).into_result()?;
    Ok(HttpResponse::Ok().json(report))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/validate", web::post().to(validate));
}
