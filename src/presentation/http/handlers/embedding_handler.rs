use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::{
    GenerateEmbeddingsUseCase, generate_embeddings::GenerateEmbeddingsRequest,
};
use crate::presentation::http::dto::{GenerateEmbeddingsRequestDto, GenerateEmbeddingsResponseDto};
use crate::presentation::http::errors::HttpError;
use crate::presentation::http::extract::ApiJson;

pub struct EmbeddingHandler {
    generate_embeddings_use_case: Arc<GenerateEmbeddingsUseCase>,
}

impl EmbeddingHandler {
    pub fn new(generate_embeddings_use_case: Arc<GenerateEmbeddingsUseCase>) -> Self {
        Self {
            generate_embeddings_use_case,
        }
    }

    pub async fn generate_embeddings(
        State(handler): State<Arc<EmbeddingHandler>>,
        ApiJson(body): ApiJson<GenerateEmbeddingsRequestDto>,
    ) -> Result<impl IntoResponse, HttpError> {
        let request = GenerateEmbeddingsRequest {
            document_id: body.document_id,
            document_text: body.document_text,
        };

        let response = handler.generate_embeddings_use_case.execute(request).await?;

        Ok((
            StatusCode::OK,
            Json(GenerateEmbeddingsResponseDto::from(response)),
        ))
    }
}
