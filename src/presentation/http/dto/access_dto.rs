use serde::Deserialize;
use uuid::Uuid;

use crate::domain::value_objects::Role;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessCheckRequestDto {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub allowed_roles: Vec<Role>,
}
