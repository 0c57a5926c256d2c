use crate::core::access::role::{Permissions, Role, Section};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the external auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    /// Role claim issued by the auth provider; `None` when absent
    pub role_claim: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Explicit session context for the current user.
///
/// Constructed once at sign-in and passed by reference to any component
/// needing the current user or role; torn down at sign-out. Never exposed
/// through a hidden global lookup.
#[derive(Debug, Clone)]
pub struct SessionContext {
    user: AuthUser,
    role: Role,
    permissions: Permissions,
}

impl SessionContext {
    pub fn new(user: AuthUser) -> Self {
        let role = Role::from_claim(user.role_claim.as_deref());
        Self {
            user,
            role,
            permissions: Permissions::for_role(role),
        }
    }

    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    pub fn can_access(&self, section: Section) -> bool {
        self.permissions.can_access(section)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    pub fn is_viewer(&self) -> bool {
        self.role == Role::Viewer
    }
}
