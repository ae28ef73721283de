use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::RiskLevel;

/// A single finding in a report. Missing text fields from the model default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskIssue {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub severity: RiskLevel,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub action: String,
}

/// What the language model returns for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceAssessment {
    pub compliance_score: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub analysis_summary: String,
    #[serde(default, alias = "issues_detected")]
    pub issues: Vec<RiskIssue>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    id: Uuid,
    document_id: Uuid,
    user_id: Uuid,
    generated_at: DateTime<Utc>,
    compliance_score: i32,
    risk_level: RiskLevel,
    analysis_summary: String,
    issues_detected: Vec<RiskIssue>,
    recommendations: Vec<Recommendation>,
    model_name: String,
    model_version: String,
}

impl ComplianceReport {
    pub fn new(
        document_id: Uuid,
        user_id: Uuid,
        assessment: ComplianceAssessment,
        model_name: String,
        model_version: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            user_id,
            generated_at: Utc::now(),
            compliance_score: Self::clamp_score(assessment.compliance_score),
            risk_level: assessment.risk_level,
            analysis_summary: assessment.analysis_summary,
            issues_detected: assessment.issues,
            recommendations: assessment.recommendations,
            model_name,
            model_version,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_database(
        id: Uuid,
        document_id: Uuid,
        user_id: Uuid,
        generated_at: DateTime<Utc>,
        compliance_score: i32,
        risk_level: RiskLevel,
        analysis_summary: String,
        issues_detected: Vec<RiskIssue>,
        recommendations: Vec<Recommendation>,
        model_name: String,
        model_version: String,
    ) -> Self {
        Self {
            id,
            document_id,
            user_id,
            generated_at,
            compliance_score,
            risk_level,
            analysis_summary,
            issues_detected,
            recommendations,
            model_name,
            model_version,
        }
    }

    fn clamp_score(raw: f64) -> i32 {
        if raw.is_nan() {
            return 0;
        }
        raw.round().clamp(0.0, 100.0) as i32
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn compliance_score(&self) -> i32 {
        self.compliance_score
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn analysis_summary(&self) -> &str {
        &self.analysis_summary
    }

    pub fn issues_detected(&self) -> &[RiskIssue] {
        &self.issues_detected
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// e.g. `gpt-4o-mini v2024-07-18`
    pub fn model_label(&self) -> String {
        format!("{} v{}", self.model_name, self.model_version)
    }

    #[cfg(test)]
    pub(crate) fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}
