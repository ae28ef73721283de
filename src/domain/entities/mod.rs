pub mod audit_log_entry;
pub mod compliance_report;
pub mod document;
pub mod embedding_record;
pub mod notification;
pub mod text_chunk;
pub mod user_role;

pub use audit_log_entry::AuditLogEntry;
pub use compliance_report::{ComplianceAssessment, ComplianceReport, Recommendation, RiskIssue};
pub use document::Document;
pub use embedding_record::EmbeddingRecord;
pub use notification::{Notification, NotificationKind};
pub use text_chunk::TextChunk;
pub use user_role::UserRole;
