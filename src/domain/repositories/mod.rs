pub mod audit_log_repository;
pub mod document_repository;
pub mod embedding_repository;
pub mod notification_repository;
pub mod report_repository;
pub mod role_repository;

pub use audit_log_repository::{AuditLogRepository, AuditLogRepositoryError};
pub use document_repository::{DocumentRepository, DocumentRepositoryError};
pub use embedding_repository::{EmbeddingRepository, EmbeddingRepositoryError};
pub use notification_repository::{NotificationRepository, NotificationRepositoryError};
pub use report_repository::{ReportRepository, ReportRepositoryError};
pub use role_repository::{RoleRepository, RoleRepositoryError};
