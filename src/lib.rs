//! FloodWatch Admin Client Core
//!
//! Client-side library for flood early-warning admin dashboards providing
//! session lifecycle management, a reconnecting realtime notification
//! client, role-based access control, and degrade-tolerant data access.

pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::access::{AuthUser, Permissions, Role, Section, SessionContext};
pub use crate::core::notify::{
    ConnectionState, ConnectionStatus, Notification, NotificationKind, NotificationList,
    NotificationPayload, RealtimeNotifier,
};
pub use crate::core::session::{
    ActivityEvent, SessionManager, SessionPhase, SessionPolicy, SignOut,
};
pub use crate::core::store::{AuditTrail, DashboardStore, StoreClient};
pub use crate::domain::config::FloodWatchConfig;
pub use crate::domain::error::{FloodWatchError, FloodWatchResult};
