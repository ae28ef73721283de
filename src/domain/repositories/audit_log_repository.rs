use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::AuditLogEntry;

#[derive(Debug)]
pub enum AuditLogRepositoryError {
    DatabaseError(String),
}

impl std::fmt::Display for AuditLogRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditLogRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for AuditLogRepositoryError {}

/// Append-only store. There is intentionally no update or delete.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), AuditLogRepositoryError>;
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<AuditLogEntry>, AuditLogRepositoryError>;
}
