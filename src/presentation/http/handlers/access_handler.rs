use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::services::RoleGuard;
use crate::domain::repositories::RoleRepository;
use crate::presentation::http::dto::AccessCheckRequestDto;
use crate::presentation::http::errors::HttpError;
use crate::presentation::http::extract::ApiJson;

pub struct AccessHandler {
    role_repository: Arc<dyn RoleRepository>,
}

impl AccessHandler {
    pub fn new(role_repository: Arc<dyn RoleRepository>) -> Self {
        Self { role_repository }
    }

    /// Each check runs its own guard, so state never leaks between sessions.
    pub async fn check_access(
        State(handler): State<Arc<AccessHandler>>,
        ApiJson(body): ApiJson<AccessCheckRequestDto>,
    ) -> Result<impl IntoResponse, HttpError> {
        let guard = RoleGuard::new(handler.role_repository.clone());
        let state = guard.evaluate(body.user_id, &body.allowed_roles).await;

        Ok((StatusCode::OK, Json(state)))
    }
}
