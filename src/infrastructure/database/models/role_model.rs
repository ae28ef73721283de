use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::UserRole;
use crate::domain::value_objects::Role;
use crate::infrastructure::database::schema::user_roles;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = user_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRoleModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = user_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUserRoleModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&UserRole> for NewUserRoleModel {
    fn from(user_role: &UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_role.user_id(),
            role: user_role.role().as_str().to_string(),
            created_at: user_role.created_at(),
        }
    }
}

impl TryFrom<UserRoleModel> for UserRole {
    type Error = String;

    fn try_from(model: UserRoleModel) -> Result<Self, Self::Error> {
        Ok(UserRole::from_database(
            model.user_id,
            Role::from_string(&model.role)?,
            model.created_at,
        ))
    }
}
