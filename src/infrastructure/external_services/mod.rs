pub mod compliance_model_client;
pub mod embedding_client;
pub mod http_retry;

pub use compliance_model_client::{ChatComplianceModel, ComplianceModelConfig};
pub use embedding_client::{EmbeddingClient, EmbeddingClientConfig, OpenAiEmbeddingProvider};
pub use http_retry::RetryPolicy;
