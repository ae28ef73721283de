pub mod chunking_config;
pub mod risk_level;
pub mod role;

pub use chunking_config::{ChunkingConfig, ChunkingError};
pub use risk_level::RiskLevel;
pub use role::Role;
