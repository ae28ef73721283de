use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Timestamptz};
use uuid::Uuid;

use crate::domain::entities::ComplianceReport;
use crate::domain::repositories::{ReportRepository, ReportRepositoryError};
use crate::infrastructure::database::models::{NewReportModel, ReportModel};
use crate::infrastructure::database::schema::compliance_reports::dsl::*;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

/// Latest report per document, stale and elevated, oldest first.
const REANALYSIS_CANDIDATES_SQL: &str = r#"
SELECT r.*
FROM compliance_reports r
WHERE r.generated_at < $1
  AND r.risk_level IN ('HIGH', 'CRITICAL')
  AND NOT EXISTS (
      SELECT 1
      FROM compliance_reports newer
      WHERE newer.document_id = r.document_id
        AND newer.generated_at > r.generated_at
  )
ORDER BY r.generated_at ASC
LIMIT $2
"#;

pub struct PostgresReportRepository {
    pool: DbPool,
}

impl PostgresReportRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_domain(models: Vec<ReportModel>) -> Result<Vec<ComplianceReport>, ReportRepositoryError> {
    models
        .into_iter()
        .map(|m| ComplianceReport::try_from(m).map_err(ReportRepositoryError::SerializationError))
        .collect()
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn save(&self, report: &ComplianceReport) -> Result<(), ReportRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        let new_report =
            NewReportModel::try_from(report).map_err(ReportRepositoryError::SerializationError)?;

        diesel::insert_into(compliance_reports)
            .values(&new_report)
            .execute(&mut conn)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, report_id: Uuid) -> Result<Option<ComplianceReport>, ReportRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        let model = compliance_reports
            .find(report_id)
            .select(ReportModel::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| ComplianceReport::try_from(m).map_err(ReportRepositoryError::SerializationError))
            .transpose()
    }

    async fn find_by_document_id(
        &self,
        doc_id: Uuid,
    ) -> Result<Vec<ComplianceReport>, ReportRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        let models = compliance_reports
            .filter(document_id.eq(doc_id))
            .order(generated_at.desc())
            .select(ReportModel::as_select())
            .load(&mut conn)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        to_domain(models)
    }

    async fn find_reanalysis_candidates(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<ComplianceReport>, ReportRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        let models = diesel::sql_query(REANALYSIS_CANDIDATES_SQL)
            .bind::<Timestamptz, _>(cutoff)
            .bind::<BigInt, _>(limit)
            .load::<ReportModel>(&mut conn)
            .map_err(|e| ReportRepositoryError::DatabaseError(e.to_string()))?;

        to_domain(models)
    }
}
