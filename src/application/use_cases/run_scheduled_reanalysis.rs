use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::application::use_cases::batch_analyze_documents::{
    BatchAnalyzeDocumentsUseCase, BatchAnalyzeError, BatchAnalyzeRequest, OutcomeStatus,
};
use crate::domain::entities::Notification;
use crate::domain::repositories::{DocumentRepository, NotificationRepository, ReportRepository};

#[derive(Debug)]
pub enum ScheduledReanalysisError {
    InvalidSettings(String),
    RepositoryError(String),
    BatchFailed(BatchAnalyzeError),
}

impl std::fmt::Display for ScheduledReanalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduledReanalysisError::InvalidSettings(msg) => {
                write!(f, "Invalid re-analysis settings: {}", msg)
            }
            ScheduledReanalysisError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
            ScheduledReanalysisError::BatchFailed(e) => {
                write!(f, "Batch re-analysis failed: {}", e)
            }
        }
    }
}

impl std::error::Error for ScheduledReanalysisError {}

#[derive(Debug, Clone, Copy)]
pub struct ReanalysisSettings {
    pub stale_after_days: i64,
    pub max_batch: i64,
}

impl Default for ReanalysisSettings {
    fn default() -> Self {
        Self {
            stale_after_days: 30,
            max_batch: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduledReanalysisResponse {
    pub message: String,
    pub count: usize,
    pub successful: usize,
    pub notifications_created: usize,
}

pub struct RunScheduledReanalysisUseCase {
    report_repository: Arc<dyn ReportRepository>,
    document_repository: Arc<dyn DocumentRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    batch_analyze: Arc<BatchAnalyzeDocumentsUseCase>,
    settings: ReanalysisSettings,
}

impl RunScheduledReanalysisUseCase {
    pub fn new(
        report_repository: Arc<dyn ReportRepository>,
        document_repository: Arc<dyn DocumentRepository>,
        notification_repository: Arc<dyn NotificationRepository>,
        batch_analyze: Arc<BatchAnalyzeDocumentsUseCase>,
        settings: ReanalysisSettings,
    ) -> Self {
        Self {
            report_repository,
            document_repository,
            notification_repository,
            batch_analyze,
            settings,
        }
    }

    pub async fn execute(&self) -> Result<ScheduledReanalysisResponse, ScheduledReanalysisError> {
        tracing::info!("Starting scheduled re-analysis check");

        if self.settings.max_batch < 1 {
            return Err(ScheduledReanalysisError::InvalidSettings(format!(
                "max batch must be at least 1, got {}",
                self.settings.max_batch
            )));
        }
        let cutoff = Duration::try_days(self.settings.stale_after_days)
            .and_then(|window| Utc::now().checked_sub_signed(window))
            .ok_or_else(|| {
                ScheduledReanalysisError::InvalidSettings(format!(
                    "stale window of {} days is out of range",
                    self.settings.stale_after_days
                ))
            })?;
        let candidates = self
            .report_repository
            .find_reanalysis_candidates(cutoff, self.settings.max_batch)
            .await
            .map_err(|e| ScheduledReanalysisError::RepositoryError(e.to_string()))?;

        let mut seen = HashSet::new();
        let document_ids: Vec<Uuid> = candidates
            .iter()
            .map(|report| report.document_id())
            .filter(|id| seen.insert(*id))
            .collect();

        if document_ids.is_empty() {
            tracing::info!("No documents require re-analysis");
            return Ok(ScheduledReanalysisResponse {
                message: "No documents require re-analysis".to_string(),
                count: 0,
                successful: 0,
                notifications_created: 0,
            });
        }

        tracing::info!("Found {} documents to re-analyze", document_ids.len());

        let batch = self
            .batch_analyze
            .execute(BatchAnalyzeRequest {
                document_ids: document_ids.iter().map(Uuid::to_string).collect(),
            })
            .await
            .map_err(ScheduledReanalysisError::BatchFailed)?;

        let mut notifications = Vec::with_capacity(batch.successful);
        for outcome in batch
            .results
            .iter()
            .filter(|r| r.status == OutcomeStatus::Success)
        {
            match self.document_repository.find_by_id(outcome.document_id).await {
                Ok(Some(document)) => notifications.push(Notification::reanalysis_complete(
                    document.user_id(),
                    document.id(),
                    document.display_name(),
                )),
                Ok(None) => tracing::warn!(
                    "Document {} disappeared before notification",
                    outcome.document_id
                ),
                Err(e) => tracing::warn!(
                    "Could not load document {} for notification: {}",
                    outcome.document_id,
                    e
                ),
            }
        }

        let notifications_created = if notifications.is_empty() {
            0
        } else {
            match self.notification_repository.save_batch(&notifications).await {
                Ok(()) => notifications.len(),
                Err(e) => {
                    tracing::warn!("Failed to create re-analysis notifications: {}", e);
                    0
                }
            }
        };

        Ok(ScheduledReanalysisResponse {
            message: format!(
                "Scheduled re-analysis initiated for {} documents",
                document_ids.len()
            ),
            count: document_ids.len(),
            successful: batch.successful,
            notifications_created,
        })
    }
}
