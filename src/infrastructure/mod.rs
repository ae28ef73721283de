pub mod config;
pub mod container;
pub mod database;
pub mod external_services;
pub mod file_system;
#[cfg(test)]
pub mod memory;
pub mod messaging;

// Re-export commonly used items
pub use config::AppConfig;
pub use container::AppContainer;
pub use database::{DbPool, create_connection_pool};
