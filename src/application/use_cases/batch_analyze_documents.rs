use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{DocumentAnalyzer, DocumentStorage};
use crate::domain::repositories::DocumentRepository;

#[derive(Debug)]
pub enum BatchAnalyzeError {
    InvalidInput(String),
    ConfigurationError(String),
}

impl std::fmt::Display for BatchAnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchAnalyzeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            BatchAnalyzeError::ConfigurationError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BatchAnalyzeError {}

#[derive(Debug, Clone, Copy)]
pub struct BatchSettings {
    pub group_size: usize,
    pub group_delay: Duration,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            group_size: 3,
            group_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    pub document_id: Uuid,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BatchAnalyzeRequest {
    pub document_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BatchAnalyzeResponse {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<DocumentOutcome>,
}

impl BatchAnalyzeResponse {
    /// False only when nothing in the batch succeeded.
    pub fn any_succeeded(&self) -> bool {
        self.successful > 0
    }
}

/// Analyzes documents in bounded concurrent groups.
///
/// Every successful analysis stores a new report. Running the same document
/// again adds a second report rather than replacing the first, so readers
/// take the most recent one by `generated_at`.
pub struct BatchAnalyzeDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    document_storage: Arc<dyn DocumentStorage>,
    analyzer: Option<Arc<dyn DocumentAnalyzer>>,
    settings: BatchSettings,
}

impl BatchAnalyzeDocumentsUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        document_storage: Arc<dyn DocumentStorage>,
        analyzer: Option<Arc<dyn DocumentAnalyzer>>,
        settings: BatchSettings,
    ) -> Self {
        Self {
            document_repository,
            document_storage,
            analyzer,
            settings,
        }
    }

    pub async fn execute(
        &self,
        request: BatchAnalyzeRequest,
    ) -> Result<BatchAnalyzeResponse, BatchAnalyzeError> {
        let analyzer = self.analyzer.as_ref().ok_or_else(|| {
            BatchAnalyzeError::ConfigurationError("document analyzer is not configured".to_string())
        })?;

        if request.document_ids.is_empty() {
            return Err(BatchAnalyzeError::InvalidInput(
                "document_ids must be a non-empty array".to_string(),
            ));
        }

        let document_ids = request
            .document_ids
            .iter()
            .map(|raw| {
                Uuid::parse_str(raw.trim()).map_err(|_| {
                    BatchAnalyzeError::InvalidInput(format!("Invalid document id: {}", raw))
                })
            })
            .collect::<Result<Vec<Uuid>, _>>()?;

        tracing::info!("Starting batch analysis for {} documents", document_ids.len());

        let group_size = self.settings.group_size.max(1);
        let group_count = document_ids.len().div_ceil(group_size);
        let mut results = Vec::with_capacity(document_ids.len());

        for (group_index, group) in document_ids.chunks(group_size).enumerate() {
            let outcomes = join_all(
                group
                    .iter()
                    .map(|&document_id| self.analyze_one(&**analyzer, document_id)),
            )
            .await;
            results.extend(outcomes);

            let more_groups = group_index + 1 < group_count;
            if more_groups && !self.settings.group_delay.is_zero() {
                tokio::time::sleep(self.settings.group_delay).await;
            }
        }

        let successful = results
            .iter()
            .filter(|r| r.status == OutcomeStatus::Success)
            .count();
        let failed = results.len() - successful;

        tracing::info!(
            "Batch analysis complete: {} successful, {} failed",
            successful,
            failed
        );

        Ok(BatchAnalyzeResponse {
            total: results.len(),
            successful,
            failed,
            results,
        })
    }

    async fn analyze_one(&self, analyzer: &dyn DocumentAnalyzer, document_id: Uuid) -> DocumentOutcome {
        match self.fetch_and_analyze(analyzer, document_id).await {
            Ok(report_id) => DocumentOutcome {
                document_id,
                status: OutcomeStatus::Success,
                report_id: Some(report_id),
                error: None,
            },
            Err(message) => {
                tracing::error!("Error processing document {}: {}", document_id, message);
                DocumentOutcome {
                    document_id,
                    status: OutcomeStatus::Error,
                    report_id: None,
                    error: Some(message),
                }
            }
        }
    }

    async fn fetch_and_analyze(
        &self,
        analyzer: &dyn DocumentAnalyzer,
        document_id: Uuid,
    ) -> Result<Uuid, String> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await
            .map_err(|e| format!("Failed to load document {}: {}", document_id, e))?
            .ok_or_else(|| format!("Document {} not found", document_id))?;

        let bytes = self
            .document_storage
            .download(document.storage_path())
            .await
            .map_err(|e| format!("Failed to download document {}: {}", document_id, e))?;
        let text = String::from_utf8_lossy(&bytes);

        analyzer
            .analyze(document_id, &text, document.display_name())
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{AuditLogger, ComplianceAnalysisService};
    use crate::domain::entities::Document;
    use crate::domain::value_objects::RiskLevel;
    use crate::infrastructure::memory::{
        InMemoryAuditLogRepository, InMemoryDocumentRepository, InMemoryDocumentStorage,
        InMemoryNotificationRepository, InMemoryReportRepository,
    };
    use crate::test_support::{RecordingAnalyzer, StubComplianceModel};

    struct Fixture {
        documents: Arc<InMemoryDocumentRepository>,
        storage: Arc<InMemoryDocumentStorage>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                documents: Arc::new(InMemoryDocumentRepository::new()),
                storage: Arc::new(InMemoryDocumentStorage::new()),
            }
        }

        async fn add(&self, name: &str, content: Option<&str>) -> Uuid {
            let path = format!("user/{}", name);
            let document = Document::new(
                Uuid::new_v4(),
                path.clone(),
                name.to_string(),
                format!("Original {}", name),
                None,
            );
            self.documents.save(&document).await.unwrap();
            if let Some(content) = content {
                self.storage.put(&path, content.as_bytes()).await;
            }
            document.id()
        }

        fn use_case(&self, analyzer: Option<Arc<RecordingAnalyzer>>, group_size: usize) -> BatchAnalyzeDocumentsUseCase {
            BatchAnalyzeDocumentsUseCase::new(
                self.documents.clone(),
                self.storage.clone(),
                analyzer.map(|a| a as Arc<dyn DocumentAnalyzer>),
                BatchSettings {
                    group_size,
                    group_delay: Duration::ZERO,
                },
            )
        }
    }

    fn request(ids: &[Uuid]) -> BatchAnalyzeRequest {
        BatchAnalyzeRequest {
            document_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_failed_download_does_not_affect_siblings() {
        let f = Fixture::new();
        let a = f.add("a.txt", Some("alpha")).await;
        let b = f.add("b.txt", None).await;
        let c = f.add("c.txt", Some("gamma")).await;
        let analyzer = Arc::new(RecordingAnalyzer::new());

        let response = f
            .use_case(Some(analyzer.clone()), 3)
            .execute(request(&[a, b, c]))
            .await
            .unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.successful, 2);
        assert_eq!(response.failed, 1);
        let ids: Vec<Uuid> = response.results.iter().map(|r| r.document_id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(response.results[1].status, OutcomeStatus::Error);
        assert!(response.results[1].error.as_deref().unwrap().contains("download"));
        assert_eq!(analyzer.call_count(), 2);
    }

    #[tokio::test]
    async fn test_analyzer_receives_text_and_display_name() {
        let f = Fixture::new();
        let a = f.add("a.txt", Some("policy text")).await;
        let analyzer = Arc::new(RecordingAnalyzer::new());

        f.use_case(Some(analyzer.clone()), 3)
            .execute(request(&[a]))
            .await
            .unwrap();

        let calls = analyzer.calls.lock().unwrap();
        assert_eq!(calls[0], (a, "policy text".to_string(), "Original a.txt".to_string()));
    }

    #[tokio::test]
    async fn test_missing_document_and_analyzer_failure_are_item_errors() {
        let f = Fixture::new();
        let a = f.add("a.txt", Some("alpha")).await;
        let c = f.add("c.txt", Some("gamma")).await;
        let missing = Uuid::new_v4();
        let analyzer = Arc::new(RecordingAnalyzer::failing_for(&[c]));

        let response = f
            .use_case(Some(analyzer), 2)
            .execute(request(&[a, missing, c]))
            .await
            .unwrap();

        assert_eq!(response.successful, 1);
        assert_eq!(response.failed, 2);
        assert!(response.any_succeeded());
        assert_eq!(
            response.results[1].error.as_deref(),
            Some(format!("Document {} not found", missing).as_str())
        );
        assert_eq!(response.results[2].status, OutcomeStatus::Error);
    }

    #[tokio::test]
    async fn test_groups_bound_concurrency() {
        let f = Fixture::new();
        let mut ids = Vec::new();
        for i in 0..7 {
            ids.push(f.add(&format!("{}.txt", i), Some("text")).await);
        }
        let analyzer = Arc::new(RecordingAnalyzer::new());

        let response = f
            .use_case(Some(analyzer.clone()), 3)
            .execute(request(&ids))
            .await
            .unwrap();

        assert_eq!(response.successful, 7);
        assert!(analyzer.max_in_flight.load(std::sync::atomic::Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_before_any_work() {
        let f = Fixture::new();
        let analyzer = Arc::new(RecordingAnalyzer::new());

        let result = f
            .use_case(Some(analyzer.clone()), 3)
            .execute(BatchAnalyzeRequest { document_ids: vec![] })
            .await;

        assert!(matches!(result, Err(BatchAnalyzeError::InvalidInput(_))));
        assert_eq!(f.documents.lookup_count(), 0);
        assert_eq!(f.storage.download_count(), 0);
        assert_eq!(analyzer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected_before_any_work() {
        let f = Fixture::new();
        let a = f.add("a.txt", Some("alpha")).await;
        let analyzer = Arc::new(RecordingAnalyzer::new());

        let result = f
            .use_case(Some(analyzer.clone()), 3)
            .execute(BatchAnalyzeRequest {
                document_ids: vec![a.to_string(), "not-a-uuid".to_string()],
            })
            .await;

        assert!(matches!(result, Err(BatchAnalyzeError::InvalidInput(_))));
        assert_eq!(f.documents.lookup_count(), 0);
        assert_eq!(analyzer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_analyzer_is_configuration_error() {
        let f = Fixture::new();
        let a = f.add("a.txt", Some("alpha")).await;

        let result = f.use_case(None, 3).execute(request(&[a])).await;

        assert!(matches!(result, Err(BatchAnalyzeError::ConfigurationError(_))));
        assert_eq!(f.documents.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_every_item_failing_still_returns_summary() {
        let f = Fixture::new();
        let analyzer = Arc::new(RecordingAnalyzer::new());

        let response = f
            .use_case(Some(analyzer), 3)
            .execute(request(&[Uuid::new_v4(), Uuid::new_v4()]))
            .await
            .unwrap();

        assert_eq!(response.failed, 2);
        assert!(!response.any_succeeded());
    }

    #[tokio::test]
    async fn test_reanalyzing_adds_a_new_report() {
        let f = Fixture::new();
        let a = f.add("a.txt", Some("policy text")).await;
        let reports = Arc::new(InMemoryReportRepository::new());
        let analyzer = Arc::new(ComplianceAnalysisService::new(
            Arc::new(StubComplianceModel::new(RiskLevel::Medium, 64.0)),
            f.documents.clone(),
            reports.clone(),
            Arc::new(InMemoryNotificationRepository::new()),
            Arc::new(AuditLogger::new(Arc::new(InMemoryAuditLogRepository::new()))),
        ));
        let use_case = BatchAnalyzeDocumentsUseCase::new(
            f.documents.clone(),
            f.storage.clone(),
            Some(analyzer as Arc<dyn DocumentAnalyzer>),
            BatchSettings {
                group_size: 3,
                group_delay: Duration::ZERO,
            },
        );

        let first = use_case.execute(request(&[a])).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = use_case.execute(request(&[a])).await.unwrap();

        assert_eq!(first.successful, 1);
        assert_eq!(second.successful, 1);
        assert_ne!(first.results[0].report_id, second.results[0].report_id);

        let mut stored: Vec<_> = reports
            .all()
            .await
            .into_iter()
            .filter(|report| report.document_id() == a)
            .collect();
        assert_eq!(stored.len(), 2);
        stored.sort_by_key(|report| report.generated_at());
        assert_ne!(stored[0].id(), stored[1].id());
        assert!(stored[0].generated_at() < stored[1].generated_at());
        assert_eq!(stored[1].id(), second.results[0].report_id.unwrap());
    }
}
