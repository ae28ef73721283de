use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::entities::AuditLogEntry;
use crate::domain::repositories::AuditLogRepository;
use crate::domain::value_objects::RiskLevel;

#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub user_id: Uuid,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub description: String,
    pub risk_level: RiskLevel,
    pub user_agent: Option<String>,
}

/// Records user actions. A failed write is logged and counted, never returned.
pub struct AuditLogger {
    repository: Arc<dyn AuditLogRepository>,
    write_failures: AtomicU64,
}

impl AuditLogger {
    pub fn new(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self {
            repository,
            write_failures: AtomicU64::new(0),
        }
    }

    /// Returns whether the entry was stored.
    pub async fn record(&self, event: AuditEvent) -> bool {
        let entry = AuditLogEntry::new(
            event.user_id,
            event.action,
            event.resource_type,
            event.resource_id,
            event.description,
            event.risk_level,
            event.user_agent,
        );

        match self.repository.append(&entry).await {
            Ok(()) => {
                tracing::debug!(
                    "Audit entry {} recorded: {} on {}",
                    entry.id(),
                    entry.action(),
                    entry.resource_type()
                );
                true
            }
            Err(e) => {
                self.write_failures.fetch_add(1, Ordering::Relaxed);
                tracing::error!(
                    "Failed to record audit event '{}' for user {}: {}",
                    entry.action(),
                    entry.user_id(),
                    e
                );
                false
            }
        }
    }

    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }
}
