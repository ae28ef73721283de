use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::value_objects::Role;

#[derive(Debug)]
pub enum RoleRepositoryError {
    DatabaseError(String),
    InvalidRole(String),
}

impl std::fmt::Display for RoleRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            RoleRepositoryError::InvalidRole(msg) => write!(f, "Invalid stored role: {}", msg),
        }
    }
}

impl std::error::Error for RoleRepositoryError {}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_roles(&self, user_id: Uuid) -> Result<Vec<Role>, RoleRepositoryError>;
    /// Inserts the role unless the user already holds it. Returns whether a row was added.
    async fn assign_role(&self, user_id: Uuid, role: Role) -> Result<bool, RoleRepositoryError>;
}
