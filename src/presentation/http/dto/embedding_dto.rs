use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::use_cases::generate_embeddings::GenerateEmbeddingsResponse;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateEmbeddingsRequestDto {
    pub document_id: String,
    pub document_text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmbeddingsResponseDto {
    pub success: bool,
    pub document_id: Uuid,
    pub run_id: Uuid,
    pub chunks_processed: usize,
    pub chunks_embedded: usize,
    pub message: String,
}

impl From<GenerateEmbeddingsResponse> for GenerateEmbeddingsResponseDto {
    fn from(response: GenerateEmbeddingsResponse) -> Self {
        let run = response.run;
        Self {
            success: true,
            document_id: response.document_id,
            run_id: run.run_id,
            chunks_processed: run.chunks_attempted,
            chunks_embedded: run.chunks_succeeded,
            message: format!(
                "Generated embeddings for {} of {} chunks",
                run.chunks_succeeded, run.chunks_attempted
            ),
        }
    }
}
