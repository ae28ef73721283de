use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::RiskLevel;

fn default_resource_type() -> String {
    "application".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditEventRequestDto {
    pub user_id: Uuid,
    pub action: String,
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Serialize)]
pub struct AuditEventResponseDto {
    pub success: bool,
    pub recorded: bool,
}
