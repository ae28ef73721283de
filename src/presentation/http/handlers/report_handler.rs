use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{ExportReportUseCase, export_report::ExportReportRequest};
use crate::presentation::http::dto::ExportReportRequestDto;
use crate::presentation::http::errors::HttpError;
use crate::presentation::http::extract::ApiJson;

pub struct ReportHandler {
    export_report_use_case: Arc<ExportReportUseCase>,
}

impl ReportHandler {
    pub fn new(export_report_use_case: Arc<ExportReportUseCase>) -> Self {
        Self {
            export_report_use_case,
        }
    }

    pub async fn export_report(
        State(handler): State<Arc<ReportHandler>>,
        headers: HeaderMap,
        ApiJson(body): ApiJson<ExportReportRequestDto>,
    ) -> Result<impl IntoResponse, HttpError> {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let request = ExportReportRequest {
            report_id: body.report_id,
            format: body.format,
            user_agent,
        };

        let exported = handler.export_report_use_case.execute(request).await?;

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, exported.format.content_type().to_string()),
                (header::CONTENT_DISPOSITION, exported.content_disposition()),
            ],
            exported.body,
        ))
    }
}
