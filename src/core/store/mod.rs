// Store module - Remote data access with a local degrade policy
pub mod audit;
pub mod client;
pub mod dashboard;
pub mod types;

pub use audit::AuditTrail;
pub use client::{SelectFilter, StoreClient, ADMIN_ALERTS, ADMIN_LOGS, FLOOD_REPORTS};
pub use dashboard::DashboardStore;
pub use types::{
    AdminAlert, AdminLog, AlertDraft, AlertSeverity, FloodReport, ReportLocation, ReportSeverity,
    ReportStatus, ReportStatusUpdate, TargetLocation,
};
