use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::RunScheduledReanalysisUseCase;
use crate::presentation::http::dto::ReanalysisResponseDto;
use crate::presentation::http::errors::HttpError;

pub struct ReanalysisHandler {
    run_reanalysis_use_case: Arc<RunScheduledReanalysisUseCase>,
}

impl ReanalysisHandler {
    pub fn new(run_reanalysis_use_case: Arc<RunScheduledReanalysisUseCase>) -> Self {
        Self {
            run_reanalysis_use_case,
        }
    }

    /// Same run the background scheduler performs, triggered on demand.
    pub async fn run_reanalysis(
        State(handler): State<Arc<ReanalysisHandler>>,
    ) -> Result<impl IntoResponse, HttpError> {
        let response = handler.run_reanalysis_use_case.execute().await?;

        Ok((StatusCode::OK, Json(ReanalysisResponseDto::from(response))))
    }
}
