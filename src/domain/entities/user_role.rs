use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    user_id: Uuid,
    role: Role,
    created_at: DateTime<Utc>,
}

impl UserRole {
    pub fn new(user_id: Uuid, role: Role) -> Self {
        Self {
            user_id,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn from_database(user_id: Uuid, role: Role, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            role,
            created_at,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
