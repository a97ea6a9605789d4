use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::validators::json_payload_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_payload_error))
        // Health check
        .route("/health", web::get().to(health_check))
        // OpenAPI document
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/users")
                // Create user
                .route("", web::post().to(handlers::create_user))
                // Get specific user by ID
                .route("/{id}", web::get().to(handlers::get_user))
                // Update user, full or partial
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::patch().to(handlers::update_user))
                // Delete user
                .route("/{id}", web::delete().to(handlers::delete_user)),
        );
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
