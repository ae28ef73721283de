use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::ComplianceReport;
use crate::domain::value_objects::RiskLevel;
use crate::infrastructure::database::schema::compliance_reports;

#[derive(Debug, Clone, Queryable, QueryableByName, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(super::DocumentModel, foreign_key = document_id))]
#[diesel(table_name = compliance_reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReportModel {
    pub id: Uuid,
    pub document_id: Uuid,
    pub user_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub compliance_score: i32,
    pub risk_level: String,
    pub analysis_summary: String,
    pub issues_detected: serde_json::Value,
    pub recommendations: serde_json::Value,
    pub model_name: String,
    pub model_version: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = compliance_reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewReportModel {
    pub id: Uuid,
    pub document_id: Uuid,
    pub user_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub compliance_score: i32,
    pub risk_level: String,
    pub analysis_summary: String,
    pub issues_detected: serde_json::Value,
    pub recommendations: serde_json::Value,
    pub model_name: String,
    pub model_version: String,
}

impl TryFrom<&ComplianceReport> for NewReportModel {
    type Error = String;

    fn try_from(report: &ComplianceReport) -> Result<Self, Self::Error> {
        Ok(Self {
            id: report.id(),
            document_id: report.document_id(),
            user_id: report.user_id(),
            generated_at: report.generated_at(),
            compliance_score: report.compliance_score(),
            risk_level: report.risk_level().as_str().to_string(),
            analysis_summary: report.analysis_summary().to_string(),
            issues_detected: serde_json::to_value(report.issues_detected())
                .map_err(|e| e.to_string())?,
            recommendations: serde_json::to_value(report.recommendations())
                .map_err(|e| e.to_string())?,
            model_name: report.model_name().to_string(),
            model_version: report.model_version().to_string(),
        })
    }
}

impl TryFrom<ReportModel> for ComplianceReport {
    type Error = String;

    fn try_from(model: ReportModel) -> Result<Self, Self::Error> {
        let risk_level = RiskLevel::from_string(&model.risk_level)?;
        let issues = serde_json::from_value(model.issues_detected)
            .map_err(|e| format!("Invalid issues_detected: {}", e))?;
        let recommendations = serde_json::from_value(model.recommendations)
            .map_err(|e| format!("Invalid recommendations: {}", e))?;

        Ok(ComplianceReport::from_database(
            model.id,
            model.document_id,
            model.user_id,
            model.generated_at,
            model.compliance_score,
            risk_level,
            model.analysis_summary,
            issues,
            recommendations,
            model.model_name,
            model.model_version,
        ))
    }
}
