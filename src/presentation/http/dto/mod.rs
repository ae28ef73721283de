pub mod access_dto;
pub mod analysis_dto;
pub mod audit_dto;
pub mod embedding_dto;
pub mod reanalysis_dto;
pub mod report_dto;
pub mod response_dto;

pub use access_dto::*;
pub use analysis_dto::*;
pub use audit_dto::*;
pub use embedding_dto::*;
pub use reanalysis_dto::*;
pub use report_dto::*;
pub use response_dto::*;
