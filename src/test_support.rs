use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pgvector::Vector;
use uuid::Uuid;

use crate::application::ports::compliance_model::{AssessmentRequest, ComplianceModelError};
use crate::application::ports::document_analyzer::AnalysisError;
use crate::application::ports::embedding_provider::{
    EmbeddingProviderError, EmbeddingRequest, EmbeddingResponse,
};
use crate::application::ports::{ComplianceModel, DocumentAnalyzer, EmbeddingProvider};
use crate::domain::entities::{ComplianceAssessment, RiskIssue};
use crate::domain::value_objects::RiskLevel;

/// Returns a 3-dimensional vector derived from the text length and reports
/// one token per character. Texts containing `fail_marker` are rejected.
pub struct StubEmbeddingProvider {
    pub fail_marker: Option<String>,
    pub calls: AtomicUsize,
}

impl StubEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            fail_marker: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn generate_embedding(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, EmbeddingProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(marker) = &self.fail_marker {
            if request.text.contains(marker.as_str()) {
                return Err(EmbeddingProviderError::ServiceUnavailable);
            }
        }

        let len = request.text.chars().count();
        Ok(EmbeddingResponse {
            embedding: Vector::from(vec![len as f32, 1.0, 0.5]),
            model_name: self.model_name(),
            token_count: Some(len as i32),
        })
    }

    fn model_name(&self) -> String {
        "stub-embedding".to_string()
    }
}

pub struct StubComplianceModel {
    pub risk_level: RiskLevel,
    pub score: f64,
    pub failure: Mutex<Option<ComplianceModelError>>,
    pub requests: Mutex<Vec<AssessmentRequest>>,
}

impl StubComplianceModel {
    pub fn new(risk_level: RiskLevel, score: f64) -> Self {
        Self {
            risk_level,
            score,
            failure: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ComplianceModelError) -> Self {
        let model = Self::new(RiskLevel::Low, 0.0);
        *model.failure.lock().unwrap() = Some(error);
        model
    }
}

#[async_trait]
impl ComplianceModel for StubComplianceModel {
    async fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<ComplianceAssessment, ComplianceModelError> {
        self.requests.lock().unwrap().push(request);
        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }

        Ok(ComplianceAssessment {
            compliance_score: self.score,
            risk_level: self.risk_level,
            analysis_summary: "Stub assessment".to_string(),
            issues: vec![RiskIssue {
                id: "ISS-1".to_string(),
                title: "Missing retention clause".to_string(),
                severity: self.risk_level,
                category: "Data Protection".to_string(),
                description: "No retention period defined".to_string(),
                recommendation: "Define a retention schedule".to_string(),
                timeline: "30 days".to_string(),
            }],
            recommendations: vec![],
        })
    }

    fn model_info(&self) -> (String, String) {
        ("stub-model".to_string(), "1".to_string())
    }
}

/// Analyzer that records every call and fails for chosen documents.
#[derive(Default)]
pub struct RecordingAnalyzer {
    pub failing: HashSet<Uuid>,
    pub calls: Mutex<Vec<(Uuid, String, String)>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl RecordingAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(ids: &[Uuid]) -> Self {
        Self {
            failing: ids.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentAnalyzer for RecordingAnalyzer {
    async fn analyze(
        &self,
        document_id: Uuid,
        text: &str,
        filename: &str,
    ) -> Result<Uuid, AnalysisError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;

        self.calls
            .lock()
            .unwrap()
            .push((document_id, text.to_string(), filename.to_string()));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(&document_id) {
            return Err(AnalysisError::DownstreamFailure("model unavailable".to_string()));
        }
        Ok(Uuid::new_v4())
    }
}
