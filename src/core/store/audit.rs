use crate::core::store::dashboard::DashboardStore;
use serde_json::json;
use std::sync::Arc;

/// Named helpers over the raw audit-trail write.
///
/// Every method is best-effort: an unreachable store is logged and otherwise
/// ignored, so auditing never blocks the action being audited.
pub struct AuditTrail {
    store: Arc<DashboardStore>,
}

impl AuditTrail {
    pub fn new(store: Arc<DashboardStore>) -> Self {
        Self { store }
    }

    pub async fn login(&self) {
        self.store.record_action("login", json!({})).await;
    }

    pub async fn logout(&self) {
        self.store.record_action("logout", json!({})).await;
    }

    pub async fn alert_sent(&self, alert_id: &str, severity: &str) {
        self.store
            .record_action(
                "send_alert",
                json!({ "alert_id": alert_id, "severity": severity }),
            )
            .await;
    }

    pub async fn report_status_changed(&self, report_id: &str, status: &str) {
        self.store
            .record_action(
                "update_report_status",
                json!({ "report_id": report_id, "status": status }),
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::client::{SelectFilter, StoreClient, ADMIN_LOGS};
    use crate::domain::error::FloodWatchResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Client recording every insert it receives
    struct RecordingClient {
        inserts: Mutex<Vec<(String, serde_json::Value)>>,
    }

    #[async_trait]
    impl StoreClient for RecordingClient {
        async fn select(
            &self,
            _collection: &str,
            _filter: Option<SelectFilter>,
            _limit: Option<usize>,
        ) -> FloodWatchResult<Vec<serde_json::Value>> {
            Ok(Vec::new())
        }

        async fn insert(
            &self,
            collection: &str,
            record: serde_json::Value,
        ) -> FloodWatchResult<serde_json::Value> {
            self.inserts
                .lock()
                .unwrap()
                .push((collection.to_string(), record.clone()));
            Ok(record)
        }

        async fn update(
            &self,
            _collection: &str,
            _id: &str,
            patch: serde_json::Value,
        ) -> FloodWatchResult<serde_json::Value> {
            Ok(patch)
        }
    }

    #[tokio::test]
    async fn test_actions_land_in_audit_collection() {
        let client = Arc::new(RecordingClient {
            inserts: Mutex::new(Vec::new()),
        });
        let store = Arc::new(DashboardStore::new(client.clone(), "admin-1"));
        let audit = AuditTrail::new(store);

        audit.login().await;
        audit.alert_sent("a1", "red").await;
        audit.report_status_changed("r1", "verified").await;
        audit.logout().await;

        let inserts = client.inserts.lock().unwrap();
        assert_eq!(inserts.len(), 4);
        assert!(inserts.iter().all(|(c, _)| c == ADMIN_LOGS));
        assert_eq!(inserts[1].1["action"], "send_alert");
        assert_eq!(inserts[1].1["details"]["alert_id"], "a1");
        assert_eq!(inserts[2].1["details"]["status"], "verified");
        assert!(inserts.iter().all(|(_, r)| r["admin_user_id"] == "admin-1"));
    }
}
