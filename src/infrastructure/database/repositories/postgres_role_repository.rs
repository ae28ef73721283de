use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::UserRole;
use crate::domain::repositories::{RoleRepository, RoleRepositoryError};
use crate::domain::value_objects::Role;
use crate::infrastructure::database::models::NewUserRoleModel;
use crate::infrastructure::database::schema::user_roles::dsl::*;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

pub struct PostgresRoleRepository {
    pool: DbPool,
}

impl PostgresRoleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn find_roles(&self, owner_id: Uuid) -> Result<Vec<Role>, RoleRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        let stored: Vec<String> = user_roles
            .filter(user_id.eq(owner_id))
            .order(created_at.asc())
            .select(role)
            .load(&mut conn)
            .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        stored
            .iter()
            .map(|r| Role::from_string(r).map_err(RoleRepositoryError::InvalidRole))
            .collect()
    }

    async fn assign_role(&self, owner_id: Uuid, new_role: Role) -> Result<bool, RoleRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        let inserted = diesel::insert_into(user_roles)
            .values(&NewUserRoleModel::from(&UserRole::new(owner_id, new_role)))
            .on_conflict((user_id, role))
            .do_nothing()
            .execute(&mut conn)
            .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted > 0)
    }
}
