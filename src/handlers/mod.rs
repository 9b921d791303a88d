pub mod generation_handler;
pub mod health_handler;

use actix_web::web;

use crate::errors::AppError;

/// Malformed JSON bodies (wrong types, missing fields, out-of-range integers)
/// are input errors like any other validation failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InputError(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generation_handler::generate_lesson)
        .service(generation_handler::generate_quiz)
        .service(health_handler::health_check);
}
