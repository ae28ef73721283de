use std::sync::{Arc, Mutex};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::repositories::RoleRepository;
use crate::domain::value_objects::Role;

/// What a UI should do with role-gated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AccessState {
    /// No signed-in user. Nothing is loading and nothing is shown.
    Idle,
    Loading,
    Error { message: String },
    NoAccess { roles: Vec<Role> },
    Access { roles: Vec<Role> },
}

impl AccessState {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessState::Access { .. })
    }
}

/// Decides whether role-gated content is rendered for one user session.
///
/// This is a presentation check, not an authorization boundary.
pub struct RoleGuard {
    role_repository: Arc<dyn RoleRepository>,
    state: Mutex<AccessState>,
}

impl RoleGuard {
    pub fn new(role_repository: Arc<dyn RoleRepository>) -> Self {
        Self {
            role_repository,
            state: Mutex::new(AccessState::Idle),
        }
    }

    pub fn state(&self) -> AccessState {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn set_state(&self, next: AccessState) -> AccessState {
        match self.state.lock() {
            Ok(mut state) => *state = next.clone(),
            Err(poisoned) => *poisoned.into_inner() = next.clone(),
        }
        next
    }

    pub async fn evaluate(&self, user_id: Option<Uuid>, allowed_roles: &[Role]) -> AccessState {
        let Some(user_id) = user_id else {
            return self.set_state(AccessState::Idle);
        };

        self.set_state(AccessState::Loading);

        let mut roles = match self.role_repository.find_roles(user_id).await {
            Ok(roles) => roles,
            Err(e) => {
                tracing::error!("Failed to fetch roles for user {}: {}", user_id, e);
                return self.set_state(AccessState::Error {
                    message: "Failed to load user roles".to_string(),
                });
            }
        };

        if roles.is_empty() {
            let default_role = Role::default();
            match self.role_repository.assign_role(user_id, default_role).await {
                Ok(inserted) => {
                    if inserted {
                        tracing::info!("Provisioned default role {} for user {}", default_role, user_id);
                    }
                    roles.push(default_role);
                }
                Err(e) => {
                    tracing::error!("Failed to assign default role to user {}: {}", user_id, e);
                    return self.set_state(AccessState::Error {
                        message: "Failed to assign default role".to_string(),
                    });
                }
            }
        }

        if roles.iter().any(|role| allowed_roles.contains(role)) {
            self.set_state(AccessState::Access { roles })
        } else {
            self.set_state(AccessState::NoAccess { roles })
        }
    }
}
