use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::ComplianceReport;

#[derive(Debug)]
pub enum ReportRepositoryError {
    DatabaseError(String),
    SerializationError(String),
}

impl std::fmt::Display for ReportRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ReportRepositoryError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ReportRepositoryError {}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn save(&self, report: &ComplianceReport) -> Result<(), ReportRepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplianceReport>, ReportRepositoryError>;
    /// All reports of a document, newest first.
    async fn find_by_document_id(
        &self,
        document_id: Uuid,
    ) -> Result<Vec<ComplianceReport>, ReportRepositoryError>;
    /// Latest-per-document reports with elevated risk generated before `cutoff`,
    /// oldest first.
    async fn find_reanalysis_candidates(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<ComplianceReport>, ReportRepositoryError>;
}
