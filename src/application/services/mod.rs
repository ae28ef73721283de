pub mod audit_logger;
pub mod compliance_analysis_service;
pub mod embedding_service;
pub mod role_guard;
pub mod text_chunker;

pub use audit_logger::AuditLogger;
pub use compliance_analysis_service::ComplianceAnalysisService;
pub use embedding_service::EmbeddingService;
pub use role_guard::RoleGuard;
pub use text_chunker::TextChunker;
