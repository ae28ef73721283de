use async_trait::async_trait;

use crate::domain::entities::ComplianceAssessment;

#[derive(Debug)]
pub enum ComplianceModelError {
    NetworkError(String),
    ApiError(String),
    RateLimitExceeded,
    CreditsExhausted,
    InvalidResponse(String),
}

impl std::fmt::Display for ComplianceModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceModelError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ComplianceModelError::ApiError(msg) => write!(f, "API error: {}", msg),
            ComplianceModelError::RateLimitExceeded => {
                write!(f, "Rate limit exceeded, please try again later")
            }
            ComplianceModelError::CreditsExhausted => {
                write!(f, "AI credits exhausted, please add credits to continue")
            }
            ComplianceModelError::InvalidResponse(msg) => {
                write!(f, "Invalid model response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ComplianceModelError {}

#[derive(Debug, Clone)]
pub struct AssessmentRequest {
    pub filename: String,
    pub text: String,
}

/// A language model that grades a document for compliance risk.
#[async_trait]
pub trait ComplianceModel: Send + Sync {
    async fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<ComplianceAssessment, ComplianceModelError>;

    /// `(name, version)` persisted with every report.
    fn model_info(&self) -> (String, String);
}
