use chrono::{DateTime, Utc};
use pgvector::Vector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One embedded chunk of a document, written once per embedding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    id: Uuid,
    document_id: Uuid,
    run_id: Uuid,
    chunk_index: i32,
    chunk_text: String,
    embedding: Vector,
    model_name: String,
    metadata: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl EmbeddingRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        document_id: Uuid,
        run_id: Uuid,
        chunk_index: i32,
        chunk_text: String,
        embedding: Vector,
        model_name: String,
        chunk_size: usize,
        total_chunks: usize,
        start_offset: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            run_id,
            chunk_index,
            chunk_text,
            embedding,
            model_name,
            metadata: serde_json::json!({
                "chunk_size": chunk_size,
                "total_chunks": total_chunks,
                "start_offset": start_offset,
            }),
            created_at: Utc::now(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_database(
        id: Uuid,
        document_id: Uuid,
        run_id: Uuid,
        chunk_index: i32,
        chunk_text: String,
        embedding: Vector,
        model_name: String,
        metadata: serde_json::Value,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            document_id,
            run_id,
            chunk_index,
            chunk_text,
            embedding,
            model_name,
            metadata,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn chunk_index(&self) -> i32 {
        self.chunk_index
    }

    pub fn chunk_text(&self) -> &str {
        &self.chunk_text
    }

    pub fn embedding(&self) -> &Vector {
        &self.embedding
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn metadata(&self) -> &serde_json::Value {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn dimension(&self) -> usize {
        self.embedding.as_slice().len()
    }
}
