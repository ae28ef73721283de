use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use std::sync::Arc;

use crate::application::services::AuditLogger;
use crate::presentation::http::dto::{ApiResponse, HealthResponseDto};

pub fn health_routes(audit_logger: Arc<AuditLogger>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .with_state(audit_logger)
}

async fn health_handler(State(audit_logger): State<Arc<AuditLogger>>) -> impl IntoResponse {
    let health_response = HealthResponseDto {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        audit_write_failures: audit_logger.write_failures(),
    };

    (StatusCode::OK, Json(ApiResponse::success(health_response)))
}
