use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::{
    BatchAnalyzeDocumentsUseCase, batch_analyze_documents::BatchAnalyzeRequest,
};
use crate::presentation::http::dto::{BatchAnalyzeRequestDto, BatchAnalyzeResponseDto};
use crate::presentation::http::errors::HttpError;
use crate::presentation::http::extract::ApiJson;

pub struct AnalysisHandler {
    batch_analyze_use_case: Arc<BatchAnalyzeDocumentsUseCase>,
}

impl AnalysisHandler {
    pub fn new(batch_analyze_use_case: Arc<BatchAnalyzeDocumentsUseCase>) -> Self {
        Self {
            batch_analyze_use_case,
        }
    }

    /// Partial failure is still a 200; the body carries the per-document outcome.
    pub async fn batch_analyze(
        State(handler): State<Arc<AnalysisHandler>>,
        ApiJson(body): ApiJson<BatchAnalyzeRequestDto>,
    ) -> Result<impl IntoResponse, HttpError> {
        let request = BatchAnalyzeRequest {
            document_ids: body.document_ids,
        };

        let response = handler.batch_analyze_use_case.execute(request).await?;

        Ok((StatusCode::OK, Json(BatchAnalyzeResponseDto::from(response))))
    }
}
