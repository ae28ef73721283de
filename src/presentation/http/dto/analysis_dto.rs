use serde::{Deserialize, Serialize};

use crate::application::use_cases::batch_analyze_documents::{
    BatchAnalyzeResponse, DocumentOutcome,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchAnalyzeRequestDto {
    pub document_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponseDto {
    pub success: bool,
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<DocumentOutcome>,
}

impl From<BatchAnalyzeResponse> for BatchAnalyzeResponseDto {
    fn from(response: BatchAnalyzeResponse) -> Self {
        Self {
            success: response.any_succeeded(),
            total: response.total,
            successful: response.successful,
            failed: response.failed,
            results: response.results,
        }
    }
}
