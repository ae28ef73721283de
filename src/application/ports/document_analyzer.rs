use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug)]
pub enum AnalysisError {
    NotFound(Uuid),
    DownstreamFailure(String),
    PersistenceFailure(String),
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::NotFound(id) => write!(f, "Document not found: {}", id),
            AnalysisError::DownstreamFailure(msg) => write!(f, "Analysis failed: {}", msg),
            AnalysisError::PersistenceFailure(msg) => {
                write!(f, "Failed to save compliance report: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Produces and persists one compliance report. Returns the new report id.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        document_id: Uuid,
        text: &str,
        filename: &str,
    ) -> Result<Uuid, AnalysisError>;
}
