use floodwatch::core::notify::{NoDesktop, NotificationTransport};
use floodwatch::core::store::{DashboardStore, ReportStatus, SelectFilter, StoreClient};
use floodwatch::domain::config::RealtimeConfig;
use floodwatch::infrastructure::tcp::TcpLineTransport;
use floodwatch::{
    ConnectionState, FloodWatchConfig, FloodWatchError, FloodWatchResult, RealtimeNotifier,
    SessionManager, SessionPhase, SignOut,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// Integration tests for the FloodWatch client library
#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_config_serialization() {
        let config = FloodWatchConfig::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize config");
        let deserialized: FloodWatchConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize config");

        assert_eq!(
            config.session.timeout_minutes,
            deserialized.session.timeout_minutes
        );
        assert_eq!(
            config.realtime.max_reconnect_attempts,
            deserialized.realtime.max_reconnect_attempts
        );
        assert_eq!(
            config.store.request_timeout_ms,
            deserialized.store.request_timeout_ms
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = FloodWatchConfig::default();

        assert_eq!(config.session.timeout_minutes, 30);
        assert_eq!(config.session.warning_minutes, 5);
        assert_eq!(config.realtime.reconnect_interval_ms, 3000);
        assert_eq!(config.realtime.max_reconnect_attempts, 5);
        assert_eq!(config.realtime.max_notifications, 10);
        assert!(config.realtime.endpoint.is_none());
        assert!(config.store.base_url.is_none());
    }

    struct NoopSignOut;

    #[async_trait::async_trait]
    impl SignOut for NoopSignOut {
        async fn sign_out(&self) -> FloodWatchResult<()> {
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_lifecycle_end_to_end() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let timeouts = Arc::new(AtomicUsize::new(0));
        let w = Arc::clone(&warnings);
        let t = Arc::clone(&timeouts);

        let manager = SessionManager::new(
            floodwatch::SessionPolicy::new(30, 5).unwrap(),
            Arc::new(NoopSignOut),
            Arc::new(move || {
                w.fetch_add(1, Ordering::SeqCst);
            }),
            Arc::new(move || {
                t.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .await;
        tokio::time::sleep(Duration::from_millis(1)).await;

        // Active usage keeps the session alive
        tokio::time::advance(Duration::from_secs(10 * 60)).await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        manager.record_activity().await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(manager.phase().await, SessionPhase::Active);

        // Walk into the warning window, extend, then let it expire
        tokio::time::advance(Duration::from_secs(25 * 60)).await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
        assert!(manager.is_warning_active().await);

        manager.extend_session().await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(manager.phase().await, SessionPhase::Active);

        tokio::time::advance(Duration::from_secs(30 * 60)).await;
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(timeouts.load(Ordering::SeqCst), 1);
        assert_eq!(manager.phase().await, SessionPhase::Expired);

        manager.shutdown().await;
    }

    /// Transport handing out a single scripted stream, then refusing
    struct ScriptedTransport {
        frames: std::sync::Mutex<Option<Vec<String>>>,
    }

    struct ScriptedStream {
        frames: std::collections::VecDeque<String>,
    }

    #[async_trait::async_trait]
    impl floodwatch::core::notify::InboundStream for ScriptedStream {
        async fn next_frame(&mut self) -> Option<String> {
            self.frames.pop_front()
        }
    }

    #[async_trait::async_trait]
    impl NotificationTransport for ScriptedTransport {
        async fn connect(
            &self,
            _endpoint: &str,
        ) -> FloodWatchResult<Box<dyn floodwatch::core::notify::InboundStream>> {
            match self.frames.lock().unwrap().take() {
                Some(frames) => Ok(Box::new(ScriptedStream {
                    frames: frames.into(),
                })),
                None => Err(FloodWatchError::Transport {
                    message: "source gone".to_string(),
                }),
            }
        }
    }

    fn envelope(title: &str) -> String {
        format!(
            r#"{{"type":"notification","data":{{"type":"info","title":"{}","message":"m","persistent":true}},"timestamp":"2026-08-30T10:00:00Z"}}"#,
            title
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_keeps_newest() {
        let transport = ScriptedTransport {
            frames: std::sync::Mutex::new(Some(vec![
                envelope("A"),
                envelope("B"),
                envelope("C"),
                envelope("D"),
            ])),
        };
        let config = RealtimeConfig {
            endpoint: Some("scripted".to_string()),
            max_notifications: 3,
            max_reconnect_attempts: 0,
            ..RealtimeConfig::default()
        };

        let notifier =
            RealtimeNotifier::new(config, Arc::new(transport), Arc::new(NoDesktop), None);
        notifier.connect().await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        let titles: Vec<_> = notifier
            .notifications()
            .await
            .iter()
            .map(|n| n.title.clone())
            .collect();
        assert_eq!(titles, vec!["D", "C", "B"]);
        assert_eq!(notifier.unread_count().await, 3);

        notifier.shutdown().await;
    }

    #[tokio::test]
    async fn test_tcp_transport_end_to_end() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let frame = envelope("High Water Level");
        let _server = tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let _ = socket.write_all(frame.as_bytes()).await;
                let _ = socket.write_all(b"\n").await;
                let _ = socket.flush().await;
                // Hold the socket open briefly so the client reads the line
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
        });

        let config = RealtimeConfig {
            endpoint: Some(addr.to_string()),
            max_reconnect_attempts: 0,
            ..RealtimeConfig::default()
        };
        let notifier = RealtimeNotifier::new(
            config,
            Arc::new(TcpLineTransport::new(1000)),
            Arc::new(NoDesktop),
            None,
        );

        notifier.connect().await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(notifier.connection_state().await, ConnectionState::Connected);
        let entries = notifier.notifications().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "High Water Level");

        notifier.shutdown().await;
    }

    struct UnreachableClient;

    #[async_trait::async_trait]
    impl StoreClient for UnreachableClient {
        async fn select(
            &self,
            _collection: &str,
            _filter: Option<SelectFilter>,
            _limit: Option<usize>,
        ) -> FloodWatchResult<Vec<serde_json::Value>> {
            Err(FloodWatchError::Store {
                message: "backend unreachable".to_string(),
            })
        }

        async fn insert(
            &self,
            _collection: &str,
            _record: serde_json::Value,
        ) -> FloodWatchResult<serde_json::Value> {
            Err(FloodWatchError::Store {
                message: "backend unreachable".to_string(),
            })
        }

        async fn update(
            &self,
            _collection: &str,
            _id: &str,
            _patch: serde_json::Value,
        ) -> FloodWatchResult<serde_json::Value> {
            Err(FloodWatchError::Store {
                message: "backend unreachable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_dashboard_survives_dead_backend() {
        let store = DashboardStore::new(Arc::new(UnreachableClient), "admin-1");

        assert!(store.fetch_reports(None).await.is_empty());
        assert!(store.fetch_alerts().await.is_empty());
        assert!(store.fetch_logs(None).await.is_empty());

        let update = store
            .update_report_status("r1", ReportStatus::Resolved)
            .await;
        assert_eq!(update.id, "r1");
        assert_eq!(update.status, ReportStatus::Resolved);

        store.record_action("login", serde_json::json!({})).await;
    }
}
