use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Document as DomainDocument;
use crate::infrastructure::database::schema::documents;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub storage_path: String,
    pub filename: String,
    pub original_name: String,
    pub file_type: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub last_analyzed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDocumentModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub storage_path: String,
    pub filename: String,
    pub original_name: String,
    pub file_type: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub last_analyzed_at: Option<DateTime<Utc>>,
}

impl From<&DomainDocument> for NewDocumentModel {
    fn from(document: &DomainDocument) -> Self {
        Self {
            id: document.id(),
            user_id: document.user_id(),
            storage_path: document.storage_path().to_string(),
            filename: document.filename().to_string(),
            original_name: document.original_name().to_string(),
            file_type: document.file_type().map(|s| s.to_string()),
            uploaded_at: document.uploaded_at(),
            last_analyzed_at: document.last_analyzed_at(),
        }
    }
}

impl From<DocumentModel> for DomainDocument {
    fn from(model: DocumentModel) -> Self {
        DomainDocument::from_database(
            model.id,
            model.user_id,
            model.storage_path,
            model.filename,
            model.original_name,
            model.file_type,
            model.uploaded_at,
            model.last_analyzed_at,
        )
    }
}
