pub mod batch_analyze_documents;
pub mod export_report;
pub mod generate_embeddings;
pub mod run_scheduled_reanalysis;

pub use batch_analyze_documents::BatchAnalyzeDocumentsUseCase;
pub use export_report::ExportReportUseCase;
pub use generate_embeddings::GenerateEmbeddingsUseCase;
pub use run_scheduled_reanalysis::RunScheduledReanalysisUseCase;
