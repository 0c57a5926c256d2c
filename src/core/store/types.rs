use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a citizen-submitted flood report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Moderation status of a flood report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Verified,
    Resolved,
    FalseAlarm,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::Verified => write!(f, "verified"),
            ReportStatus::Resolved => write!(f, "resolved"),
            ReportStatus::FalseAlarm => write!(f, "false_alarm"),
        }
    }
}

/// Geographic position of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLocation {
    pub state: String,
    pub district: String,
    pub lat: f64,
    pub lon: f64,
}

/// Citizen-submitted flood report awaiting review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloodReport {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub title: String,
    pub description: String,
    pub severity: ReportSeverity,
    pub location: ReportLocation,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Alert severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Yellow,
    Orange,
    Red,
}

/// Region an alert targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetLocation {
    pub state: String,
    pub district: String,
}

/// Alert composed by an admin, as it is about to be sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertDraft {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub target_location: TargetLocation,
    pub channels: Vec<String>,
}

/// Alert record as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAlert {
    pub id: String,
    pub admin_user_id: String,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub target_location: TargetLocation,
    pub channels: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl AdminAlert {
    /// Locally synthesized echo of an attempted alert write, used when the
    /// backend is unreachable
    pub fn local_echo(admin_user_id: &str, draft: AlertDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            admin_user_id: admin_user_id.to_string(),
            title: draft.title,
            message: draft.message,
            severity: draft.severity,
            target_location: draft.target_location,
            channels: draft.channels,
            created_at: Utc::now(),
        }
    }
}

/// Audit-trail entry for an admin action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLog {
    pub id: String,
    pub admin_user_id: String,
    pub action: String,
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Result of a report-status write, possibly a local echo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStatusUpdate {
    pub id: String,
    pub status: ReportStatus,
    pub updated_at: DateTime<Utc>,
}
