use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::EmbeddingRecord;

#[derive(Debug)]
pub enum EmbeddingRepositoryError {
    DatabaseError(String),
    DuplicateChunk { run_id: Uuid, chunk_index: i32 },
}

impl std::fmt::Display for EmbeddingRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbeddingRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            EmbeddingRepositoryError::DuplicateChunk {
                run_id,
                chunk_index,
            } => write!(
                f,
                "Chunk {} already stored for embedding run {}",
                chunk_index, run_id
            ),
        }
    }
}

impl std::error::Error for EmbeddingRepositoryError {}

#[async_trait]
pub trait EmbeddingRepository: Send + Sync {
    async fn save(&self, record: &EmbeddingRecord) -> Result<(), EmbeddingRepositoryError>;
    /// Records of one run, ordered by chunk index.
    async fn find_by_run(&self, run_id: Uuid) -> Result<Vec<EmbeddingRecord>, EmbeddingRepositoryError>;
    async fn count_by_document(&self, document_id: Uuid) -> Result<i64, EmbeddingRepositoryError>;
}
