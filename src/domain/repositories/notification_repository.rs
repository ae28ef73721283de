use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Notification;

#[derive(Debug)]
pub enum NotificationRepositoryError {
    DatabaseError(String),
}

impl std::fmt::Display for NotificationRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for NotificationRepositoryError {}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn save(&self, notification: &Notification) -> Result<(), NotificationRepositoryError>;
    async fn save_batch(
        &self,
        notifications: &[Notification],
    ) -> Result<(), NotificationRepositoryError>;
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, NotificationRepositoryError>;
}
