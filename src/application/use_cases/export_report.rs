use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::application::services::audit_logger::{AuditEvent, AuditLogger};
use crate::domain::entities::{ComplianceReport, Document, Recommendation, RiskIssue};
use crate::domain::repositories::{DocumentRepository, ReportRepository};
use crate::domain::value_objects::RiskLevel;

#[derive(Debug)]
pub enum ExportReportError {
    InvalidInput(String),
    ReportNotFound(Uuid),
    RepositoryError(String),
    RenderError(String),
}

impl std::fmt::Display for ExportReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportReportError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ExportReportError::ReportNotFound(id) => write!(f, "Report not found: {}", id),
            ExportReportError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            ExportReportError::RenderError(msg) => write!(f, "Failed to render report: {}", msg),
        }
    }
}

impl std::error::Error for ExportReportError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!("Unsupported export format: {}", s)),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportReportRequest {
    pub report_id: String,
    pub format: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub format: ExportFormat,
    pub filename: String,
    pub body: String,
}

impl ExportedReport {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    filename: Option<&'a str>,
    original_name: Option<&'a str>,
    file_type: Option<&'a str>,
    upload_date: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Serialize)]
struct ExportAnalysis<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    compliance_score: i32,
    risk_level: RiskLevel,
    analysis_summary: &'a str,
    model: String,
}

#[derive(Serialize)]
struct ExportBundle<'a> {
    report_id: Uuid,
    document: ExportDocument<'a>,
    analysis: ExportAnalysis<'a>,
    issues_detected: &'a [RiskIssue],
    recommendations: &'a [Recommendation],
}

const CSV_HEADER: [&str; 7] = [
    "Issue ID",
    "Title",
    "Severity",
    "Category",
    "Description",
    "Recommendation",
    "Timeline",
];

pub struct ExportReportUseCase {
    report_repository: Arc<dyn ReportRepository>,
    document_repository: Arc<dyn DocumentRepository>,
    audit_logger: Arc<AuditLogger>,
}

impl ExportReportUseCase {
    pub fn new(
        report_repository: Arc<dyn ReportRepository>,
        document_repository: Arc<dyn DocumentRepository>,
        audit_logger: Arc<AuditLogger>,
    ) -> Self {
        Self {
            report_repository,
            document_repository,
            audit_logger,
        }
    }

    pub async fn execute(
        &self,
        request: ExportReportRequest,
    ) -> Result<ExportedReport, ExportReportError> {
        let report_id = Uuid::parse_str(request.report_id.trim()).map_err(|_| {
            ExportReportError::InvalidInput(format!("Invalid report id: {}", request.report_id))
        })?;
        let format = match request.format.as_deref() {
            Some(raw) => ExportFormat::from_string(raw).map_err(ExportReportError::InvalidInput)?,
            None => ExportFormat::default(),
        };

        let report = self
            .report_repository
            .find_by_id(report_id)
            .await
            .map_err(|e| ExportReportError::RepositoryError(e.to_string()))?
            .ok_or(ExportReportError::ReportNotFound(report_id))?;

        tracing::info!("Exporting report {} as {}", report_id, format.extension());

        let body = match format {
            ExportFormat::Csv => render_csv(report.issues_detected())?,
            ExportFormat::Json => {
                let document = self
                    .document_repository
                    .find_by_id(report.document_id())
                    .await
                    .map_err(|e| ExportReportError::RepositoryError(e.to_string()))?;
                render_json(&report, document.as_ref())?
            }
        };

        self.audit_logger
            .record(AuditEvent {
                user_id: report.user_id(),
                action: "report_exported".to_string(),
                resource_type: "compliance_report".to_string(),
                resource_id: Some(report_id.to_string()),
                description: format!("Exported compliance report as {}", format.extension()),
                risk_level: report.risk_level(),
                user_agent: request.user_agent,
            })
            .await;

        Ok(ExportedReport {
            format,
            filename: format!("compliance-report-{}.{}", report_id, format.extension()),
            body,
        })
    }
}

fn render_json(
    report: &ComplianceReport,
    document: Option<&Document>,
) -> Result<String, ExportReportError> {
    let bundle = ExportBundle {
        report_id: report.id(),
        document: ExportDocument {
            filename: document.map(|d| d.filename()),
            original_name: document.map(|d| d.original_name()),
            file_type: document.and_then(|d| d.file_type()),
            upload_date: document.map(|d| d.uploaded_at()),
        },
        analysis: ExportAnalysis {
            generated_at: report.generated_at(),
            compliance_score: report.compliance_score(),
            risk_level: report.risk_level(),
            analysis_summary: report.analysis_summary(),
            model: report.model_label(),
        },
        issues_detected: report.issues_detected(),
        recommendations: report.recommendations(),
    };

    serde_json::to_string_pretty(&bundle).map_err(|e| ExportReportError::RenderError(e.to_string()))
}

fn render_csv(issues: &[RiskIssue]) -> Result<String, ExportReportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let render_err = |e: csv::Error| ExportReportError::RenderError(e.to_string());

    writer.write_record(CSV_HEADER).map_err(render_err)?;
    for issue in issues {
        writer
            .write_record([
                issue.id.as_str(),
                issue.title.as_str(),
                issue.severity.as_str(),
                issue.category.as_str(),
                issue.description.as_str(),
                issue.recommendation.as_str(),
                issue.timeline.as_str(),
            ])
            .map_err(render_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportReportError::RenderError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportReportError::RenderError(e.to_string()))
}
