pub mod compliance_model;
pub mod document_analyzer;
pub mod document_storage;
pub mod embedding_provider;

pub use compliance_model::ComplianceModel;
pub use document_analyzer::DocumentAnalyzer;
pub use document_storage::DocumentStorage;
pub use embedding_provider::EmbeddingProvider;
