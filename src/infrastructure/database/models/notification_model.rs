use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::{Notification, NotificationKind};
use crate::infrastructure::database::schema::notifications;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NotificationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub related_document_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNotificationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub related_document_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Notification> for NewNotificationModel {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id(),
            user_id: notification.user_id(),
            notification_type: notification.kind().as_str().to_string(),
            title: notification.title().to_string(),
            message: notification.message().to_string(),
            related_document_id: notification.related_document_id(),
            created_at: notification.created_at(),
        }
    }
}

impl TryFrom<NotificationModel> for Notification {
    type Error = String;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        Ok(Notification::from_database(
            model.id,
            model.user_id,
            NotificationKind::from_string(&model.notification_type)?,
            model.title,
            model.message,
            model.related_document_id,
            model.created_at,
        ))
    }
}
