use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::use_cases::{
    batch_analyze_documents::BatchAnalyzeError, export_report::ExportReportError,
    generate_embeddings::GenerateEmbeddingsError,
    run_scheduled_reanalysis::ScheduledReanalysisError,
};
use crate::presentation::http::dto::ApiResponse;

/// An invocation-level failure, rendered as the standard error envelope.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CONFIGURATION_ERROR",
            message,
        )
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "PERSISTENCE_FAILURE",
            message,
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}: {}", self.code, self.message);
        }

        (
            self.status,
            Json(ApiResponse::<()>::error(
                self.code.to_string(),
                self.message,
                None,
            )),
        )
            .into_response()
    }
}

impl From<BatchAnalyzeError> for HttpError {
    fn from(e: BatchAnalyzeError) -> Self {
        match e {
            BatchAnalyzeError::InvalidInput(msg) => HttpError::invalid_input(msg),
            BatchAnalyzeError::ConfigurationError(msg) => HttpError::configuration(msg),
        }
    }
}

impl From<ExportReportError> for HttpError {
    fn from(e: ExportReportError) -> Self {
        match e {
            ExportReportError::InvalidInput(msg) => HttpError::invalid_input(msg),
            ExportReportError::ReportNotFound(id) => {
                HttpError::not_found(format!("Report not found: {}", id))
            }
            ExportReportError::RepositoryError(msg) => HttpError::persistence(msg),
            ExportReportError::RenderError(msg) => HttpError::internal(msg),
        }
    }
}

impl From<GenerateEmbeddingsError> for HttpError {
    fn from(e: GenerateEmbeddingsError) -> Self {
        match e {
            GenerateEmbeddingsError::InvalidInput(msg) => HttpError::invalid_input(msg),
            GenerateEmbeddingsError::DocumentNotFound(id) => {
                HttpError::not_found(format!("Document not found: {}", id))
            }
            GenerateEmbeddingsError::ConfigurationError(msg) => HttpError::configuration(msg),
            GenerateEmbeddingsError::RepositoryError(msg) => HttpError::persistence(msg),
        }
    }
}

impl From<ScheduledReanalysisError> for HttpError {
    fn from(e: ScheduledReanalysisError) -> Self {
        match e {
            ScheduledReanalysisError::InvalidSettings(msg) => HttpError::configuration(msg),
            ScheduledReanalysisError::RepositoryError(msg) => HttpError::persistence(msg),
            ScheduledReanalysisError::BatchFailed(inner) => HttpError::from(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_kinds_map_to_statuses() {
        let invalid = HttpError::from(BatchAnalyzeError::InvalidInput("empty".to_string()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code(), "INVALID_INPUT");

        let missing = HttpError::from(ExportReportError::ReportNotFound(Uuid::new_v4()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let unconfigured = HttpError::from(ScheduledReanalysisError::BatchFailed(
            BatchAnalyzeError::ConfigurationError("no key".to_string()),
        ));
        assert_eq!(unconfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(unconfigured.code(), "CONFIGURATION_ERROR");

        let bad_window = HttpError::from(ScheduledReanalysisError::InvalidSettings(
            "stale window out of range".to_string(),
        ));
        assert_eq!(bad_window.code(), "CONFIGURATION_ERROR");

        let store = HttpError::from(GenerateEmbeddingsError::RepositoryError("down".to_string()));
        assert_eq!(store.code(), "PERSISTENCE_FAILURE");
    }
}
