use crate::core::store::{
    client::{SelectFilter, StoreClient, ADMIN_ALERTS, ADMIN_LOGS, FLOOD_REPORTS},
    types::{AdminAlert, AdminLog, AlertDraft, FloodReport, ReportStatus, ReportStatusUpdate},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// How many alerts the dashboard shows in its recent-alerts panel
const RECENT_ALERTS_LIMIT: usize = 10;

/// Dashboard-facing data access with a single degrade-policy point.
///
/// Every read degrades to an empty result and every write to a locally
/// synthesized echo when the store is unreachable, so the UI stays usable
/// with zero backend connectivity. No store error ever escapes this type.
pub struct DashboardStore {
    client: Arc<dyn StoreClient>,
    admin_user_id: String,
}

impl DashboardStore {
    pub fn new(client: Arc<dyn StoreClient>, admin_user_id: impl Into<String>) -> Self {
        Self {
            client,
            admin_user_id: admin_user_id.into(),
        }
    }

    pub fn admin_user_id(&self) -> &str {
        &self.admin_user_id
    }

    /// Fetch flood reports, optionally filtered by status; empty on error
    pub async fn fetch_reports(&self, status: Option<ReportStatus>) -> Vec<FloodReport> {
        let filter = status.map(|s| SelectFilter::eq("status", &s.to_string()));
        self.fetch_list(FLOOD_REPORTS, filter, None).await
    }

    /// Fetch the most recent alerts; empty on error
    pub async fn fetch_alerts(&self) -> Vec<AdminAlert> {
        self.fetch_list(ADMIN_ALERTS, None, Some(RECENT_ALERTS_LIMIT))
            .await
    }

    /// Fetch the audit trail, optionally filtered by action; empty on error
    pub async fn fetch_logs(&self, action: Option<&str>) -> Vec<AdminLog> {
        let filter = action.map(|a| SelectFilter::eq("action", a));
        self.fetch_list(ADMIN_LOGS, filter, None).await
    }

    /// Persist an alert; on store failure return a local echo so the UI
    /// can proceed optimistically
    pub async fn send_alert(&self, draft: AlertDraft) -> AdminAlert {
        let record = serde_json::json!({
            "admin_user_id": self.admin_user_id,
            "title": draft.title,
            "message": draft.message,
            "severity": draft.severity,
            "target_location": draft.target_location,
            "channels": draft.channels,
        });

        match self.client.insert(ADMIN_ALERTS, record).await {
            Ok(value) => match serde_json::from_value(value) {
                Ok(alert) => alert,
                Err(e) => {
                    warn!("stored alert had unexpected shape, echoing locally: {}", e);
                    AdminAlert::local_echo(&self.admin_user_id, draft)
                }
            },
            Err(e) => {
                warn!("could not send alert, echoing locally: {}", e);
                AdminAlert::local_echo(&self.admin_user_id, draft)
            }
        }
    }

    /// Update a report's moderation status; echoes the attempted update on
    /// store failure
    pub async fn update_report_status(
        &self,
        report_id: &str,
        status: ReportStatus,
    ) -> ReportStatusUpdate {
        let now = Utc::now();
        let patch = serde_json::json!({
            "status": status,
            "updated_at": now,
        });

        match self.client.update(FLOOD_REPORTS, report_id, patch).await {
            Ok(value) => serde_json::from_value(value).unwrap_or(ReportStatusUpdate {
                id: report_id.to_string(),
                status,
                updated_at: now,
            }),
            Err(e) => {
                warn!("could not update report status, echoing locally: {}", e);
                ReportStatusUpdate {
                    id: report_id.to_string(),
                    status,
                    updated_at: now,
                }
            }
        }
    }

    /// Record an admin action in the audit trail. Best-effort: failures are
    /// logged and swallowed.
    pub async fn record_action(&self, action: &str, details: serde_json::Value) {
        let record = serde_json::json!({
            "admin_user_id": self.admin_user_id,
            "action": action,
            "details": details,
        });

        if let Err(e) = self.client.insert(ADMIN_LOGS, record).await {
            warn!("could not record admin action '{}': {}", action, e);
        } else {
            debug!("recorded admin action '{}'", action);
        }
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        filter: Option<SelectFilter>,
        limit: Option<usize>,
    ) -> Vec<T> {
        match self.client.select(collection, filter, limit).await {
            Ok(rows) => rows
                .into_iter()
                .filter_map(|row| match serde_json::from_value(row) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("skipping malformed row in '{}': {}", collection, e);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                warn!("could not fetch '{}': {}", collection, e);
                Vec::new()
            }
        }
    }
}
