use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::compliance_model::{
    AssessmentRequest, ComplianceModel, ComplianceModelError,
};
use crate::domain::entities::ComplianceAssessment;
use crate::infrastructure::external_services::http_retry::{
    RetryPolicy, Retryable, is_retryable_status, send_with_retry,
};

const SYSTEM_PROMPT: &str = "You are an expert compliance analyst specializing in regulatory \
frameworks like GDPR, CCPA, HIPAA, and SOX. Provide detailed, actionable compliance assessments.";

#[derive(Debug, Clone)]
pub struct ComplianceModelConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub model_version: String,
    pub timeout_secs: u64,
    pub retry: RetryPolicy,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug)]
enum ChatRequestError {
    Network(String),
    Status { status: StatusCode, body: String },
    Parse(String),
}

impl std::fmt::Display for ChatRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRequestError::Network(msg) => write!(f, "network error: {}", msg),
            ChatRequestError::Status { status, .. } => write!(f, "status {}", status),
            ChatRequestError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl Retryable for ChatRequestError {
    fn is_retryable(&self) -> bool {
        match self {
            ChatRequestError::Network(_) => true,
            ChatRequestError::Status { status, .. } => is_retryable_status(*status),
            ChatRequestError::Parse(_) => false,
        }
    }
}

impl From<ChatRequestError> for ComplianceModelError {
    fn from(error: ChatRequestError) -> Self {
        match error {
            ChatRequestError::Network(msg) => ComplianceModelError::NetworkError(msg),
            ChatRequestError::Status { status, .. } if status == StatusCode::TOO_MANY_REQUESTS => {
                ComplianceModelError::RateLimitExceeded
            }
            ChatRequestError::Status { status, .. } if status == StatusCode::PAYMENT_REQUIRED => {
                ComplianceModelError::CreditsExhausted
            }
            ChatRequestError::Status { status, body } => {
                ComplianceModelError::ApiError(format!("{}: {}", status, body))
            }
            ChatRequestError::Parse(msg) => ComplianceModelError::InvalidResponse(msg),
        }
    }
}

/// Chat-completions client that asks for a JSON compliance assessment.
pub struct ChatComplianceModel {
    client: Client,
    config: ComplianceModelConfig,
}

impl ChatComplianceModel {
    pub fn new(config: ComplianceModelConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    async fn execute_request(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, ChatRequestError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatRequestError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Analysis model returned {}: {}", status, body);
            return Err(ChatRequestError::Status { status, body });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| ChatRequestError::Parse(e.to_string()))
    }
}

pub fn build_analysis_prompt(filename: &str, text: &str) -> String {
    format!(
        r#"Analyze the following document for regulatory compliance, data privacy, and policy adherence.

Document: {filename}
Content: {text}

Provide an overall compliance score (0-100), a risk level, a summary, the specific issues found with
their severity, and actionable recommendations with timelines.

Return your analysis in the following JSON structure:
{{
  "compliance_score": number,
  "risk_level": "CRITICAL" | "HIGH" | "MEDIUM" | "LOW",
  "analysis_summary": "string",
  "issues": [
    {{
      "id": "unique_id",
      "title": "Issue Title",
      "severity": "CRITICAL" | "HIGH" | "MEDIUM" | "LOW",
      "description": "Detailed description",
      "recommendation": "Step-by-step actionable recommendation",
      "timeline": "Within X days",
      "category": "Data Privacy | Documentation | Policy Adherence | Security"
    }}
  ],
  "recommendations": [
    {{
      "priority": "High | Medium | Low",
      "timeline": "Within X days",
      "action": "Specific action to take"
    }}
  ]
}}"#
    )
}

pub fn parse_assessment(content: &str) -> Result<ComplianceAssessment, ComplianceModelError> {
    serde_json::from_str(content.trim())
        .map_err(|e| ComplianceModelError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl ComplianceModel for ChatComplianceModel {
    async fn assess(
        &self,
        request: AssessmentRequest,
    ) -> Result<ComplianceAssessment, ComplianceModelError> {
        let chat_request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_analysis_prompt(&request.filename, &request.text),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::info!("Analyzing document: {}", request.filename);

        let response = send_with_retry(&self.config.retry, || self.execute_request(&chat_request))
            .await
            .map_err(ComplianceModelError::from)?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ComplianceModelError::InvalidResponse("completion has no content".to_string())
            })?;

        parse_assessment(&content)
    }

    fn model_info(&self) -> (String, String) {
        (self.config.model.clone(), self.config.model_version.clone())
    }
}
