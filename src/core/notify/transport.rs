use crate::domain::error::FloodWatchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Wire envelope for inbound payloads from the notification source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: serde_json::Value,
    pub timestamp: String,
}

/// Envelope type carrying a notification payload
pub const ENVELOPE_NOTIFICATION: &str = "notification";

/// Connection factory for the notification source.
///
/// Implementations open a connection to the given endpoint and hand back a
/// frame stream; the notifier owns reconnection policy on top of this.
#[async_trait]
pub trait NotificationTransport: Send + Sync {
    async fn connect(&self, endpoint: &str) -> FloodWatchResult<Box<dyn InboundStream>>;
}

/// An established connection delivering text frames.
///
/// Returning `None` means the connection closed (peer hangup or read
/// error); dropping the stream closes the connection.
#[async_trait]
pub trait InboundStream: Send {
    async fn next_frame(&mut self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialization() {
        let raw = r#"{"type":"notification","data":{"type":"info","title":"t","message":"m"},"timestamp":"2026-08-30T10:00:00Z"}"#;
        let envelope: InboundEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.kind, ENVELOPE_NOTIFICATION);
        assert!(envelope.data.is_object());
    }

    #[test]
    fn test_malformed_envelope_rejected() {
        assert!(serde_json::from_str::<InboundEnvelope>("not json").is_err());
        assert!(serde_json::from_str::<InboundEnvelope>(r#"{"type":"x"}"#).is_err());
    }
}
