use std::sync::Arc;

use crate::{
    application::{
        ports::{ComplianceModel, DocumentAnalyzer, DocumentStorage, EmbeddingProvider},
        services::{AuditLogger, ComplianceAnalysisService, EmbeddingService, TextChunker},
        use_cases::{
            BatchAnalyzeDocumentsUseCase, ExportReportUseCase, GenerateEmbeddingsUseCase,
            RunScheduledReanalysisUseCase,
        },
    },
    domain::repositories::{
        AuditLogRepository, DocumentRepository, EmbeddingRepository, NotificationRepository,
        ReportRepository, RoleRepository,
    },
    infrastructure::{
        config::AppConfig,
        database::{
            DbPool,
            repositories::{
                PostgresAuditLogRepository, PostgresDocumentRepository,
                PostgresEmbeddingRepository, PostgresNotificationRepository,
                PostgresReportRepository, PostgresRoleRepository,
            },
        },
        external_services::{
            ChatComplianceModel, EmbeddingClient, OpenAiEmbeddingProvider,
        },
        file_system::LocalDocumentStorage,
        messaging::ReanalysisScheduler,
    },
    presentation::http::handlers::{
        AccessHandler, AnalysisHandler, AuditHandler, EmbeddingHandler, ReanalysisHandler,
        ReportHandler,
    },
};

/// The ports the application needs, before any service is built on top.
pub struct Adapters {
    pub document_repository: Arc<dyn DocumentRepository>,
    pub embedding_repository: Arc<dyn EmbeddingRepository>,
    pub report_repository: Arc<dyn ReportRepository>,
    pub notification_repository: Arc<dyn NotificationRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
    pub audit_log_repository: Arc<dyn AuditLogRepository>,
    pub document_storage: Arc<dyn DocumentStorage>,
    pub compliance_model: Option<Arc<dyn ComplianceModel>>,
    pub embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
}

impl Adapters {
    pub async fn postgres(
        config: &AppConfig,
        pool: DbPool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let document_storage = LocalDocumentStorage::new(config.document_storage_dir.clone());
        document_storage
            .ensure_directory_exists()
            .await
            .map_err(|e| format!("Failed to prepare document storage: {}", e))?;

        let compliance_model: Option<Arc<dyn ComplianceModel>> = match &config.analysis {
            Some(analysis) => Some(Arc::new(ChatComplianceModel::new(analysis.clone())?)),
            None => {
                tracing::warn!("ANALYSIS_API_KEY is not set, document analysis is disabled");
                None
            }
        };

        let embedding_provider: Option<Arc<dyn EmbeddingProvider>> = match &config.embedding {
            Some(embedding) => Some(Arc::new(OpenAiEmbeddingProvider::new(
                EmbeddingClient::new(embedding.clone())?,
            ))),
            None => {
                tracing::warn!("EMBEDDING_API_KEY is not set, embedding generation is disabled");
                None
            }
        };

        Ok(Self {
            document_repository: Arc::new(PostgresDocumentRepository::new(pool.clone())),
            embedding_repository: Arc::new(PostgresEmbeddingRepository::new(pool.clone())),
            report_repository: Arc::new(PostgresReportRepository::new(pool.clone())),
            notification_repository: Arc::new(PostgresNotificationRepository::new(pool.clone())),
            role_repository: Arc::new(PostgresRoleRepository::new(pool.clone())),
            audit_log_repository: Arc::new(PostgresAuditLogRepository::new(pool)),
            document_storage: Arc::new(document_storage),
            compliance_model,
            embedding_provider,
        })
    }
}

pub struct AppContainer {
    // Application Services
    pub audit_logger: Arc<AuditLogger>,
    pub analyzer: Option<Arc<dyn DocumentAnalyzer>>,
    pub embedding_service: Option<Arc<EmbeddingService>>,

    // Use Cases
    pub batch_analyze_use_case: Arc<BatchAnalyzeDocumentsUseCase>,
    pub export_report_use_case: Arc<ExportReportUseCase>,
    pub generate_embeddings_use_case: Arc<GenerateEmbeddingsUseCase>,
    pub run_reanalysis_use_case: Arc<RunScheduledReanalysisUseCase>,

    // HTTP Handlers
    pub analysis_handler: Arc<AnalysisHandler>,
    pub report_handler: Arc<ReportHandler>,
    pub embedding_handler: Arc<EmbeddingHandler>,
    pub reanalysis_handler: Arc<ReanalysisHandler>,
    pub access_handler: Arc<AccessHandler>,
    pub audit_handler: Arc<AuditHandler>,

    reanalysis_interval: std::time::Duration,
}

impl AppContainer {
    pub async fn new(
        config: &AppConfig,
        pool: DbPool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let adapters = Adapters::postgres(config, pool).await?;
        Ok(Self::from_adapters(config, adapters))
    }

    pub fn from_adapters(config: &AppConfig, adapters: Adapters) -> Self {
        let audit_logger = Arc::new(AuditLogger::new(adapters.audit_log_repository.clone()));

        // Create application services
        let analyzer: Option<Arc<dyn DocumentAnalyzer>> =
            adapters.compliance_model.map(|model| {
                Arc::new(ComplianceAnalysisService::new(
                    model,
                    adapters.document_repository.clone(),
                    adapters.report_repository.clone(),
                    adapters.notification_repository.clone(),
                    audit_logger.clone(),
                )) as Arc<dyn DocumentAnalyzer>
            });

        let embedding_service = adapters.embedding_provider.map(|provider| {
            Arc::new(EmbeddingService::new(
                provider,
                adapters.embedding_repository.clone(),
                TextChunker::new(config.chunking),
            ))
        });

        // Create use cases
        let batch_analyze_use_case = Arc::new(BatchAnalyzeDocumentsUseCase::new(
            adapters.document_repository.clone(),
            adapters.document_storage.clone(),
            analyzer.clone(),
            config.batch,
        ));

        let export_report_use_case = Arc::new(ExportReportUseCase::new(
            adapters.report_repository.clone(),
            adapters.document_repository.clone(),
            audit_logger.clone(),
        ));

        let generate_embeddings_use_case = Arc::new(GenerateEmbeddingsUseCase::new(
            adapters.document_repository.clone(),
            embedding_service.clone(),
        ));

        let run_reanalysis_use_case = Arc::new(RunScheduledReanalysisUseCase::new(
            adapters.report_repository.clone(),
            adapters.document_repository.clone(),
            adapters.notification_repository.clone(),
            batch_analyze_use_case.clone(),
            config.reanalysis,
        ));

        // Create HTTP handlers
        let analysis_handler = Arc::new(AnalysisHandler::new(batch_analyze_use_case.clone()));
        let report_handler = Arc::new(ReportHandler::new(export_report_use_case.clone()));
        let embedding_handler =
            Arc::new(EmbeddingHandler::new(generate_embeddings_use_case.clone()));
        let reanalysis_handler = Arc::new(ReanalysisHandler::new(run_reanalysis_use_case.clone()));
        let access_handler = Arc::new(AccessHandler::new(adapters.role_repository.clone()));
        let audit_handler = Arc::new(AuditHandler::new(audit_logger.clone()));

        Self {
            audit_logger,
            analyzer,
            embedding_service,
            batch_analyze_use_case,
            export_report_use_case,
            generate_embeddings_use_case,
            run_reanalysis_use_case,
            analysis_handler,
            report_handler,
            embedding_handler,
            reanalysis_handler,
            access_handler,
            audit_handler,
            reanalysis_interval: config.reanalysis_interval,
        }
    }

    pub fn reanalysis_scheduler(&self) -> ReanalysisScheduler {
        ReanalysisScheduler::new(self.run_reanalysis_use_case.clone(), self.reanalysis_interval)
    }
}
