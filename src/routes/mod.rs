use actix_web::{HttpResponse, Responder, error, get, web};

use crate::error::AppError;

pub mod register;
pub mod stats;
pub mod teams;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health)
        .service(
            web::scope("/api")
                .configure(register::configure)
                .configure(stats::configure)
                .configure(teams::configure),
        );
}

// Malformed bodies and ids are validation failures, reported in the usual envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::ContentType => "Expected a JSON request body".to_string(),
            other => format!("Invalid request body: {}", other),
        };
        AppError::validation(message).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::validation(format!("Invalid team id: {}", err)).into())
}
