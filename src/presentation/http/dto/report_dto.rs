use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportReportRequestDto {
    pub report_id: String,
    #[serde(default)]
    pub format: Option<String>,
}
