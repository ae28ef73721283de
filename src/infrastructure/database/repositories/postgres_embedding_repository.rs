use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::domain::entities::EmbeddingRecord;
use crate::domain::repositories::{EmbeddingRepository, EmbeddingRepositoryError};
use crate::infrastructure::database::models::{EmbeddingModel, NewEmbeddingModel};
use crate::infrastructure::database::schema::document_embeddings::dsl::*;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

pub struct PostgresEmbeddingRepository {
    pool: DbPool,
}

impl PostgresEmbeddingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmbeddingRepository for PostgresEmbeddingRepository {
    async fn save(&self, record: &EmbeddingRecord) -> Result<(), EmbeddingRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| EmbeddingRepositoryError::DatabaseError(e.to_string()))?;

        diesel::insert_into(document_embeddings)
            .values(&NewEmbeddingModel::from(record))
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    EmbeddingRepositoryError::DuplicateChunk {
                        run_id: record.run_id(),
                        chunk_index: record.chunk_index(),
                    }
                }
                other => EmbeddingRepositoryError::DatabaseError(other.to_string()),
            })?;

        Ok(())
    }

    async fn find_by_run(
        &self,
        embedding_run_id: Uuid,
    ) -> Result<Vec<EmbeddingRecord>, EmbeddingRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| EmbeddingRepositoryError::DatabaseError(e.to_string()))?;

        let models = document_embeddings
            .filter(run_id.eq(embedding_run_id))
            .order(chunk_index.asc())
            .select(EmbeddingModel::as_select())
            .load(&mut conn)
            .map_err(|e| EmbeddingRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(EmbeddingRecord::from).collect())
    }

    async fn count_by_document(&self, doc_id: Uuid) -> Result<i64, EmbeddingRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| EmbeddingRepositoryError::DatabaseError(e.to_string()))?;

        document_embeddings
            .filter(document_id.eq(doc_id))
            .count()
            .get_result(&mut conn)
            .map_err(|e| EmbeddingRepositoryError::DatabaseError(e.to_string()))
    }
}
