pub mod access_handler;
pub mod analysis_handler;
pub mod audit_handler;
pub mod embedding_handler;
pub mod reanalysis_handler;
pub mod report_handler;

pub use access_handler::AccessHandler;
pub use analysis_handler::AnalysisHandler;
pub use audit_handler::AuditHandler;
pub use embedding_handler::EmbeddingHandler;
pub use reanalysis_handler::ReanalysisHandler;
pub use report_handler::ReportHandler;
