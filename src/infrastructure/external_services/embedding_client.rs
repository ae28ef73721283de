use std::time::Duration;

use async_trait::async_trait;
use pgvector::Vector;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::embedding_provider::{
    EmbeddingProvider, EmbeddingProviderError, EmbeddingRequest, EmbeddingResponse,
};
use crate::infrastructure::external_services::http_retry::{
    RetryPolicy, Retryable, is_retryable_status, send_with_retry,
};

#[derive(Serialize)]
pub struct EmbeddingsRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
}

#[derive(Deserialize)]
pub struct EmbeddingsData {
    pub embedding: Vec<f32>,
}

#[derive(Deserialize)]
pub struct EmbeddingsUsage {
    pub total_tokens: Option<i32>,
}

#[derive(Deserialize)]
pub struct EmbeddingsResponse {
    pub data: Vec<EmbeddingsData>,
    pub model: Option<String>,
    pub usage: Option<EmbeddingsUsage>,
}

#[derive(Debug, Clone)]
pub struct EmbeddingClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    pub retry: RetryPolicy,
}

#[derive(Debug)]
pub enum EmbeddingClientError {
    RequestError(String),
    HttpStatus { status: StatusCode, body: String },
    ParseError(String),
}

impl std::fmt::Display for EmbeddingClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbeddingClientError::RequestError(msg) => write!(f, "Request error: {}", msg),
            EmbeddingClientError::HttpStatus { status, body } => {
                write!(f, "Embedding API returned {}: {}", status, body)
            }
            EmbeddingClientError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Retryable for EmbeddingClientError {
    fn is_retryable(&self) -> bool {
        match self {
            EmbeddingClientError::RequestError(_) => true,
            EmbeddingClientError::HttpStatus { status, .. } => is_retryable_status(*status),
            EmbeddingClientError::ParseError(_) => false,
        }
    }
}

/// Client for an OpenAI-compatible `/v1/embeddings` endpoint.
#[derive(Debug, Clone)]
pub struct EmbeddingClient {
    client: Client,
    config: EmbeddingClientConfig,
}

impl EmbeddingClient {
    pub fn new(config: EmbeddingClientConfig) -> Result<Self, ReqwestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub async fn get_embedding(&self, text: &str) -> Result<EmbeddingsResponse, EmbeddingClientError> {
        send_with_retry(&self.config.retry, || self.execute_request(text)).await
    }

    async fn execute_request(&self, text: &str) -> Result<EmbeddingsResponse, EmbeddingClientError> {
        let request = EmbeddingsRequest {
            model: &self.config.model,
            input: text,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingClientError::RequestError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingClientError::HttpStatus { status, body });
        }

        response
            .json::<EmbeddingsResponse>()
            .await
            .map_err(|e| EmbeddingClientError::ParseError(e.to_string()))
    }
}

pub struct OpenAiEmbeddingProvider {
    client: EmbeddingClient,
}

impl OpenAiEmbeddingProvider {
    pub fn new(client: EmbeddingClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    async fn generate_embedding(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, EmbeddingProviderError> {
        if request.text.is_empty() {
            return Err(EmbeddingProviderError::InvalidInput(
                "Cannot embed empty text".to_string(),
            ));
        }

        let response = self
            .client
            .get_embedding(&request.text)
            .await
            .map_err(|e| match e {
                EmbeddingClientError::RequestError(msg) => EmbeddingProviderError::NetworkError(msg),
                EmbeddingClientError::HttpStatus { status, .. }
                    if status == StatusCode::TOO_MANY_REQUESTS =>
                {
                    EmbeddingProviderError::RateLimitExceeded
                }
                EmbeddingClientError::HttpStatus { status, .. } if status.is_server_error() => {
                    EmbeddingProviderError::ServiceUnavailable
                }
                other => EmbeddingProviderError::ApiError(other.to_string()),
            })?;

        let token_count = response.usage.and_then(|u| u.total_tokens);
        let model_name = response.model.unwrap_or_else(|| self.model_name());
        let embedding = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingProviderError::ApiError("No embeddings returned".to_string()))?
            .embedding;

        Ok(EmbeddingResponse {
            embedding: Vector::from(embedding),
            model_name,
            token_count,
        })
    }

    fn model_name(&self) -> String {
        self.client.config.model.clone()
    }
}
