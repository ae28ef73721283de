use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::ReportHandler;

pub fn report_routes(report_handler: Arc<ReportHandler>) -> Router {
    Router::new()
        .route("/reports/export", post(ReportHandler::export_report))
        .with_state(report_handler)
}
