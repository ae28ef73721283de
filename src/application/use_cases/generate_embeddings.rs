use std::sync::Arc;

use uuid::Uuid;

use crate::application::services::EmbeddingService;
use crate::application::services::embedding_service::EmbeddingRunSummary;
use crate::domain::repositories::DocumentRepository;

#[derive(Debug)]
pub enum GenerateEmbeddingsError {
    InvalidInput(String),
    DocumentNotFound(Uuid),
    ConfigurationError(String),
    RepositoryError(String),
}

impl std::fmt::Display for GenerateEmbeddingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateEmbeddingsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GenerateEmbeddingsError::DocumentNotFound(id) => write!(f, "Document not found: {}", id),
            GenerateEmbeddingsError::ConfigurationError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            GenerateEmbeddingsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GenerateEmbeddingsError {}

#[derive(Debug, Clone)]
pub struct GenerateEmbeddingsRequest {
    pub document_id: String,
    pub document_text: String,
}

#[derive(Debug, Clone)]
pub struct GenerateEmbeddingsResponse {
    pub document_id: Uuid,
    pub run: EmbeddingRunSummary,
}

pub struct GenerateEmbeddingsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    /// `None` when no embedding credential is configured.
    embedding_service: Option<Arc<EmbeddingService>>,
}

impl GenerateEmbeddingsUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        embedding_service: Option<Arc<EmbeddingService>>,
    ) -> Self {
        Self {
            document_repository,
            embedding_service,
        }
    }

    pub async fn execute(
        &self,
        request: GenerateEmbeddingsRequest,
    ) -> Result<GenerateEmbeddingsResponse, GenerateEmbeddingsError> {
        let embedding_service = self.embedding_service.as_ref().ok_or_else(|| {
            GenerateEmbeddingsError::ConfigurationError(
                "embedding API key not configured".to_string(),
            )
        })?;

        let document_id = Uuid::parse_str(request.document_id.trim()).map_err(|_| {
            GenerateEmbeddingsError::InvalidInput(format!(
                "Invalid document id: {}",
                request.document_id
            ))
        })?;

        if request.document_text.trim().is_empty() {
            return Err(GenerateEmbeddingsError::InvalidInput(
                "document_text must not be empty".to_string(),
            ));
        }

        let document = self
            .document_repository
            .find_by_id(document_id)
            .await
            .map_err(|e| GenerateEmbeddingsError::RepositoryError(e.to_string()))?
            .ok_or(GenerateEmbeddingsError::DocumentNotFound(document_id))?;

        tracing::info!("Generating embeddings for document {}", document.id());

        let run = embedding_service
            .embed_document(document.id(), &request.document_text)
            .await;

        Ok(GenerateEmbeddingsResponse { document_id, run })
    }
}
