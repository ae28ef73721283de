use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::AuditLogEntry;
use crate::infrastructure::database::schema::audit_logs;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditLogModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub details: serde_json::Value,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = audit_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAuditLogModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub details: serde_json::Value,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&AuditLogEntry> for NewAuditLogModel {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id(),
            user_id: entry.user_id(),
            action: entry.action().to_string(),
            resource_type: entry.resource_type().to_string(),
            resource_id: entry.resource_id().map(|s| s.to_string()),
            details: entry.details().clone(),
            user_agent: entry.user_agent().map(|s| s.to_string()),
            created_at: entry.created_at(),
        }
    }
}

impl From<AuditLogModel> for AuditLogEntry {
    fn from(model: AuditLogModel) -> Self {
        AuditLogEntry::from_database(
            model.id,
            model.user_id,
            model.action,
            model.resource_type,
            model.resource_id,
            model.details,
            model.user_agent,
            model.created_at,
        )
    }
}
