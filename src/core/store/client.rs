use crate::domain::error::FloodWatchResult;
use async_trait::async_trait;

/// Collection of citizen flood reports
pub const FLOOD_REPORTS: &str = "flood_reports";
/// Collection of alerts sent by admins
pub const ADMIN_ALERTS: &str = "admin_alerts";
/// Collection of admin audit-trail entries
pub const ADMIN_LOGS: &str = "admin_logs";

/// Equality filter on a single column
#[derive(Debug, Clone)]
pub struct SelectFilter {
    pub column: String,
    pub value: String,
}

impl SelectFilter {
    pub fn eq(column: &str, value: &str) -> Self {
        Self {
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

/// Thin, `Result`-returning query layer over the remote data store.
///
/// Implementations report failures as ordinary errors; the degrade policy
/// (empty reads, echoed writes) lives in one place above this trait, never
/// per call site.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Fetch rows from a collection, newest first
    async fn select(
        &self,
        collection: &str,
        filter: Option<SelectFilter>,
        limit: Option<usize>,
    ) -> FloodWatchResult<Vec<serde_json::Value>>;

    /// Insert a record, returning the stored representation
    async fn insert(
        &self,
        collection: &str,
        record: serde_json::Value,
    ) -> FloodWatchResult<serde_json::Value>;

    /// Patch a record by id, returning the stored representation
    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: serde_json::Value,
    ) -> FloodWatchResult<serde_json::Value>;
}
