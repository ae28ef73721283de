use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::{AccessHandler, AuditHandler};

pub fn access_routes(
    access_handler: Arc<AccessHandler>,
    audit_handler: Arc<AuditHandler>,
) -> Router {
    Router::new()
        .route("/access/check", post(AccessHandler::check_access))
        .with_state(access_handler)
        .merge(
            Router::new()
                .route("/audit-events", post(AuditHandler::record_event))
                .with_state(audit_handler),
        )
}
