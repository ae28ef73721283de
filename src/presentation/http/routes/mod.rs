pub mod access_routes;
pub mod analysis_routes;
pub mod embedding_routes;
pub mod health_routes;
pub mod report_routes;

pub use access_routes::*;
pub use analysis_routes::*;
pub use embedding_routes::*;
pub use health_routes::*;
pub use report_routes::*;
