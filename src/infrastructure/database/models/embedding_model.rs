use chrono::{DateTime, Utc};
use diesel::prelude::*;
use pgvector::Vector;
use uuid::Uuid;

use crate::domain::entities::EmbeddingRecord;
use crate::infrastructure::database::schema::document_embeddings;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(super::DocumentModel, foreign_key = document_id))]
#[diesel(table_name = document_embeddings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmbeddingModel {
    pub id: Uuid,
    pub document_id: Uuid,
    pub run_id: Uuid,
    pub chunk_index: i32,
    pub chunk_text: String,
    pub embedding: Vector,
    pub model_name: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = document_embeddings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewEmbeddingModel {
    pub id: Uuid,
    pub document_id: Uuid,
    pub run_id: Uuid,
    pub chunk_index: i32,
    pub chunk_text: String,
    pub embedding: Vector,
    pub model_name: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<&EmbeddingRecord> for NewEmbeddingModel {
    fn from(record: &EmbeddingRecord) -> Self {
        Self {
            id: record.id(),
            document_id: record.document_id(),
            run_id: record.run_id(),
            chunk_index: record.chunk_index(),
            chunk_text: record.chunk_text().to_string(),
            embedding: record.embedding().clone(),
            model_name: record.model_name().to_string(),
            metadata: record.metadata().clone(),
            created_at: record.created_at(),
        }
    }
}

impl From<EmbeddingModel> for EmbeddingRecord {
    fn from(model: EmbeddingModel) -> Self {
        EmbeddingRecord::from_database(
            model.id,
            model.document_id,
            model.run_id,
            model.chunk_index,
            model.chunk_text,
            model.embedding,
            model.model_name,
            model.metadata,
            model.created_at,
        )
    }
}
