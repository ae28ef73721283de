use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    id: Uuid,
    user_id: Uuid,
    action: String,
    resource_type: String,
    resource_id: Option<String>,
    details: serde_json::Value,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn new(
        user_id: Uuid,
        action: String,
        resource_type: String,
        resource_id: Option<String>,
        description: String,
        risk_level: RiskLevel,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            action,
            resource_type,
            resource_id,
            details: serde_json::json!({
                "description": description,
                "risk_level": risk_level.audit_label(),
            }),
            user_agent,
            created_at: Utc::now(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_database(
        id: Uuid,
        user_id: Uuid,
        action: String,
        resource_type: String,
        resource_id: Option<String>,
        details: serde_json::Value,
        user_agent: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            action,
            resource_type,
            resource_id,
            details,
            user_agent,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn details(&self) -> &serde_json::Value {
        &self.details
    }

    pub fn description(&self) -> Option<&str> {
        self.details.get("description").and_then(|v| v.as_str())
    }

    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.details
            .get("risk_level")
            .and_then(|v| v.as_str())
            .and_then(|s| RiskLevel::from_string(s).ok())
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
