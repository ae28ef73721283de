use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::AuditLogEntry;
use crate::domain::repositories::{AuditLogRepository, AuditLogRepositoryError};
use crate::infrastructure::database::models::{AuditLogModel, NewAuditLogModel};
use crate::infrastructure::database::schema::audit_logs::dsl::*;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

pub struct PostgresAuditLogRepository {
    pool: DbPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), AuditLogRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| AuditLogRepositoryError::DatabaseError(e.to_string()))?;

        diesel::insert_into(audit_logs)
            .values(&NewAuditLogModel::from(entry))
            .execute(&mut conn)
            .map_err(|e| AuditLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<AuditLogEntry>, AuditLogRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| AuditLogRepositoryError::DatabaseError(e.to_string()))?;

        let models = audit_logs
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .select(AuditLogModel::as_select())
            .load(&mut conn)
            .map_err(|e| AuditLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(AuditLogEntry::from).collect())
    }
}
