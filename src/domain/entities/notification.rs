use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        match s {
            "info" => Ok(NotificationKind::Info),
            "warning" => Ok(NotificationKind::Warning),
            _ => Err(format!("Invalid notification type: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    id: Uuid,
    user_id: Uuid,
    kind: NotificationKind,
    title: String,
    message: String,
    related_document_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        user_id: Uuid,
        kind: NotificationKind,
        title: String,
        message: String,
        related_document_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            title,
            message,
            related_document_id,
            created_at: Utc::now(),
        }
    }

    pub fn from_database(
        id: Uuid,
        user_id: Uuid,
        kind: NotificationKind,
        title: String,
        message: String,
        related_document_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            title,
            message,
            related_document_id,
            created_at,
        }
    }

    /// Elevated risk gets a warning, everything else is informational.
    pub fn analysis_complete(
        user_id: Uuid,
        document_id: Uuid,
        document_name: &str,
        compliance_score: i32,
        risk_level: RiskLevel,
    ) -> Self {
        let kind = if risk_level.is_elevated() {
            NotificationKind::Warning
        } else {
            NotificationKind::Info
        };

        Self::new(
            user_id,
            kind,
            "Document Analysis Complete".to_string(),
            format!(
                "{} has been analyzed. Compliance Score: {}%. Risk Level: {}",
                document_name, compliance_score, risk_level
            ),
            Some(document_id),
        )
    }

    pub fn reanalysis_complete(user_id: Uuid, document_id: Uuid, document_name: &str) -> Self {
        Self::new(
            user_id,
            NotificationKind::Info,
            "Scheduled Re-analysis Complete".to_string(),
            format!(
                "Document \"{}\" has been re-analyzed as part of scheduled compliance monitoring.",
                document_name
            ),
            Some(document_id),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related_document_id(&self) -> Option<Uuid> {
        self.related_document_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
