use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: Uuid,
    user_id: Uuid,
    storage_path: String,
    filename: String,
    original_name: String,
    file_type: Option<String>,
    uploaded_at: DateTime<Utc>,
    last_analyzed_at: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(
        user_id: Uuid,
        storage_path: String,
        filename: String,
        original_name: String,
        file_type: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            storage_path,
            filename,
            original_name,
            file_type,
            uploaded_at: Utc::now(),
            last_analyzed_at: None,
        }
    }

    /// Rebuild a document from stored values
    #[allow(clippy::too_many_arguments)]
    pub fn from_database(
        id: Uuid,
        user_id: Uuid,
        storage_path: String,
        filename: String,
        original_name: String,
        file_type: Option<String>,
        uploaded_at: DateTime<Utc>,
        last_analyzed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id,
            storage_path,
            filename,
            original_name,
            file_type,
            uploaded_at,
            last_analyzed_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn storage_path(&self) -> &str {
        &self.storage_path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn file_type(&self) -> Option<&str> {
        self.file_type.as_deref()
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn last_analyzed_at(&self) -> Option<DateTime<Utc>> {
        self.last_analyzed_at
    }

    /// Name shown to users; falls back to the stored filename.
    pub fn display_name(&self) -> &str {
        if self.original_name.trim().is_empty() {
            &self.filename
        } else {
            &self.original_name
        }
    }

    pub fn mark_analyzed(&mut self, at: DateTime<Utc>) {
        self.last_analyzed_at = Some(at);
    }
}
