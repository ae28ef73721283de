pub mod audit_log_model;
pub mod document_model;
pub mod embedding_model;
pub mod notification_model;
pub mod report_model;
pub mod role_model;

pub use audit_log_model::*;
pub use document_model::*;
pub use embedding_model::*;
pub use notification_model::*;
pub use report_model::*;
pub use role_model::*;
