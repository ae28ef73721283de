use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::ports::compliance_model::AssessmentRequest;
use crate::application::ports::document_analyzer::AnalysisError;
use crate::application::ports::{ComplianceModel, DocumentAnalyzer};
use crate::application::services::audit_logger::{AuditEvent, AuditLogger};
use crate::domain::entities::{ComplianceReport, Document, Notification};
use crate::domain::repositories::{DocumentRepository, NotificationRepository, ReportRepository};

/// Characters of document text sent to the model.
pub const MAX_ANALYSIS_CHARS: usize = 10_000;

pub struct ComplianceAnalysisService {
    model: Arc<dyn ComplianceModel>,
    document_repository: Arc<dyn DocumentRepository>,
    report_repository: Arc<dyn ReportRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    audit_logger: Arc<AuditLogger>,
}

impl ComplianceAnalysisService {
    pub fn new(
        model: Arc<dyn ComplianceModel>,
        document_repository: Arc<dyn DocumentRepository>,
        report_repository: Arc<dyn ReportRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
        audit_logger: Arc<AuditLogger>,
    ) -> Self {
        Self {
            model,
            document_repository,
            report_repository,
            notification_repository,
            audit_logger,
        }
    }

    async fn after_report_saved(&self, document: &Document, report: &ComplianceReport) {
        if let Err(e) = self
            .document_repository
            .mark_analyzed(document.id(), report.generated_at())
            .await
        {
            tracing::warn!("Failed to update analysis time of document {}: {}", document.id(), e);
        }

        let notification = Notification::analysis_complete(
            document.user_id(),
            document.id(),
            document.display_name(),
            report.compliance_score(),
            report.risk_level(),
        );
        if let Err(e) = self.notification_repository.save(&notification).await {
            tracing::warn!("Failed to create notification for document {}: {}", document.id(), e);
        }

        self.audit_logger
            .record(AuditEvent {
                user_id: document.user_id(),
                action: "document_analyzed".to_string(),
                resource_type: "document".to_string(),
                resource_id: Some(document.id().to_string()),
                description: format!(
                    "Analyzed {}: compliance score {}%",
                    document.display_name(),
                    report.compliance_score()
                ),
                risk_level: report.risk_level(),
                user_agent: None,
            })
            .await;
    }
}

#[async_trait]
impl DocumentAnalyzer for ComplianceAnalysisService {
    async fn analyze(
        &self,
        document_id: Uuid,
        text: &str,
        filename: &str,
    ) -> Result<Uuid, AnalysisError> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await
            .map_err(|e| AnalysisError::PersistenceFailure(e.to_string()))?
            .ok_or(AnalysisError::NotFound(document_id))?;

        let request = AssessmentRequest {
            filename: filename.to_string(),
            text: text.chars().take(MAX_ANALYSIS_CHARS).collect(),
        };

        let started = Utc::now();
        let assessment = self
            .model
            .assess(request)
            .await
            .map_err(|e| AnalysisError::DownstreamFailure(e.to_string()))?;

        let (model_name, model_version) = self.model.model_info();
        let report = ComplianceReport::new(
            document.id(),
            document.user_id(),
            assessment,
            model_name,
            model_version,
        );

        self.report_repository
            .save(&report)
            .await
            .map_err(|e| AnalysisError::PersistenceFailure(e.to_string()))?;

        tracing::info!(
            "Document {} analyzed in {} ms: score {}, risk {}",
            document_id,
            (Utc::now() - started).num_milliseconds(),
            report.compliance_score(),
            report.risk_level()
        );

        self.after_report_saved(&document, &report).await;

        Ok(report.id())
    }
}
