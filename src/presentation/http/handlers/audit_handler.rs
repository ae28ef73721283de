use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::services::{AuditLogger, audit_logger::AuditEvent};
use crate::domain::value_objects::RiskLevel;
use crate::presentation::http::dto::{AuditEventRequestDto, AuditEventResponseDto};
use crate::presentation::http::errors::HttpError;
use crate::presentation::http::extract::ApiJson;

pub struct AuditHandler {
    audit_logger: Arc<AuditLogger>,
}

impl AuditHandler {
    pub fn new(audit_logger: Arc<AuditLogger>) -> Self {
        Self { audit_logger }
    }

    /// Accepted even when the write fails; `recorded` says whether it stuck.
    pub async fn record_event(
        State(handler): State<Arc<AuditHandler>>,
        headers: HeaderMap,
        ApiJson(body): ApiJson<AuditEventRequestDto>,
    ) -> Result<impl IntoResponse, HttpError> {
        if body.action.trim().is_empty() {
            return Err(HttpError::invalid_input("action must not be empty"));
        }

        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let event = AuditEvent {
            user_id: body.user_id,
            description: body.description.unwrap_or_else(|| body.action.clone()),
            action: body.action,
            resource_type: body.resource_type,
            resource_id: body.resource_id,
            risk_level: body.risk_level.unwrap_or(RiskLevel::Low),
            user_agent,
        };

        let recorded = handler.audit_logger.record(event).await;

        Ok((
            StatusCode::ACCEPTED,
            Json(AuditEventResponseDto {
                success: true,
                recorded,
            }),
        ))
    }
}
