use serde::{Deserialize, Serialize};

/// Dashboard role resolved from an auth-provider claim.
///
/// Unknown or missing claims resolve to the least-privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Viewer,
}

impl Role {
    /// Resolve a role from the `role` claim on the authenticated user
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("admin") => Role::Admin,
            Some("moderator") => Role::Moderator,
            Some("viewer") => Role::Viewer,
            _ => Role::Viewer,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Moderator => write!(f, "moderator"),
            Role::Viewer => write!(f, "viewer"),
        }
    }
}

/// Capability flags granted to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub can_view_dashboard: bool,
    pub can_manage_reports: bool,
    pub can_send_alerts: bool,
    pub can_view_logs: bool,
    pub can_run_predictions: bool,
    pub can_export_data: bool,
    pub can_manage_users: bool,
}

impl Permissions {
    /// Static permission table
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                can_view_dashboard: true,
                can_manage_reports: true,
                can_send_alerts: true,
                can_view_logs: true,
                can_run_predictions: true,
                can_export_data: true,
                can_manage_users: true,
            },
            Role::Moderator => Self {
                can_view_dashboard: true,
                can_manage_reports: true,
                can_send_alerts: true,
                can_view_logs: false,
                can_run_predictions: true,
                can_export_data: true,
                can_manage_users: false,
            },
            Role::Viewer => Self {
                can_view_dashboard: true,
                can_manage_reports: false,
                can_send_alerts: false,
                can_view_logs: false,
                can_run_predictions: false,
                can_export_data: false,
                can_manage_users: false,
            },
        }
    }
}

/// Gated dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Reports,
    Alerts,
    Logs,
    Prediction,
}

impl Permissions {
    /// Whether the holder may open the given dashboard section
    pub fn can_access(&self, section: Section) -> bool {
        match section {
            Section::Dashboard => self.can_view_dashboard,
            Section::Reports => self.can_manage_reports,
            Section::Alerts => self.can_send_alerts,
            Section::Logs => self.can_view_logs,
            Section::Prediction => self.can_run_predictions,
        }
    }
}
