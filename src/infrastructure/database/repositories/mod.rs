pub mod postgres_audit_log_repository;
pub mod postgres_document_repository;
pub mod postgres_embedding_repository;
pub mod postgres_notification_repository;
pub mod postgres_report_repository;
pub mod postgres_role_repository;

pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_document_repository::PostgresDocumentRepository;
pub use postgres_embedding_repository::PostgresEmbeddingRepository;
pub use postgres_notification_repository::PostgresNotificationRepository;
pub use postgres_report_repository::PostgresReportRepository;
pub use postgres_role_repository::PostgresRoleRepository;
