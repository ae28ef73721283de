use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Notification;
use crate::domain::repositories::{NotificationRepository, NotificationRepositoryError};
use crate::infrastructure::database::models::{NewNotificationModel, NotificationModel};
use crate::infrastructure::database::schema::notifications::dsl::*;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

pub struct PostgresNotificationRepository {
    pool: DbPool,
}

impl PostgresNotificationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PostgresNotificationRepository {
    async fn save(&self, notification: &Notification) -> Result<(), NotificationRepositoryError> {
        self.save_batch(std::slice::from_ref(notification)).await
    }

    async fn save_batch(
        &self,
        batch: &[Notification],
    ) -> Result<(), NotificationRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        let rows: Vec<NewNotificationModel> = batch.iter().map(NewNotificationModel::from).collect();

        diesel::insert_into(notifications)
            .values(&rows)
            .execute(&mut conn)
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        let models = notifications
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .select(NotificationModel::as_select())
            .load(&mut conn)
            .map_err(|e| NotificationRepositoryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| Notification::try_from(m).map_err(NotificationRepositoryError::DatabaseError))
            .collect()
    }
}
