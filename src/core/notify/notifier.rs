use crate::core::notify::{
    connection::{ConnectionState, ConnectionStatus},
    desktop::{DesktopNotifier, DesktopPermission},
    list::{Notification, NotificationList, NotificationPayload},
    transport::{InboundEnvelope, NotificationTransport, ENVELOPE_NOTIFICATION},
};
use crate::domain::config::RealtimeConfig;
use crate::domain::error::{FloodWatchError, FloodWatchResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// UI callback invoked for every appended notification
pub type NotificationCallback = Arc<dyn Fn(&Notification) + Send + Sync>;

struct Inner {
    config: RealtimeConfig,
    transport: Arc<dyn NotificationTransport>,
    desktop: Arc<dyn DesktopNotifier>,
    on_notification: Option<NotificationCallback>,
    connection: RwLock<ConnectionStatus>,
    list: RwLock<NotificationList>,
    run_task: Mutex<Option<tokio::task::JoinHandle<()>>>,
    remove_tasks: Mutex<Vec<tokio::task::JoinHandle<()>>>,
    disposed: AtomicBool,
}

/// Best-effort realtime notification client.
///
/// Maintains an optional persistent connection to a notification source
/// with bounded fixed-interval reconnection, and presents a
/// capacity-bounded, newest-first, read-tracked notification list to the
/// hosting UI. Without a configured endpoint the notifier runs in a
/// permanent offline mode; local notifications still work.
pub struct RealtimeNotifier {
    inner: Arc<Inner>,
}

impl RealtimeNotifier {
    pub fn new(
        config: RealtimeConfig,
        transport: Arc<dyn NotificationTransport>,
        desktop: Arc<dyn DesktopNotifier>,
        on_notification: Option<NotificationCallback>,
    ) -> Self {
        if desktop.permission() == DesktopPermission::Default {
            desktop.request_permission();
        }

        let capacity = config.max_notifications;
        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                desktop,
                on_notification,
                connection: RwLock::new(ConnectionStatus::new()),
                list: RwLock::new(NotificationList::new(capacity)),
                run_task: Mutex::new(None),
                remove_tasks: Mutex::new(Vec::new()),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Open the connection to the notification source.
    ///
    /// No-op without a configured endpoint (offline by design) and while a
    /// connection attempt or live connection already exists.
    pub async fn connect(&self) {
        let Some(endpoint) = self.inner.config.endpoint.clone() else {
            debug!("no notification endpoint configured, realtime disabled");
            return;
        };

        if self.inner.disposed.load(Ordering::SeqCst) {
            return;
        }

        let mut task = self.inner.run_task.lock().await;
        if let Some(handle) = task.as_ref() {
            if !handle.is_finished() {
                return;
            }
        }

        let inner = Arc::clone(&self.inner);
        *task = Some(tokio::spawn(Inner::run(inner, endpoint)));
    }

    /// Close the connection, cancelling any pending reconnect delay
    pub async fn disconnect(&self) {
        if let Some(handle) = self.inner.run_task.lock().await.take() {
            handle.abort();
        }

        let mut conn = self.inner.connection.write().await;
        conn.state = ConnectionState::Disconnected;
        debug!("notification connection closed deliberately");
    }

    /// Full teardown: disconnect and cancel every outstanding auto-remove
    /// timer so nothing mutates state afterwards
    pub async fn shutdown(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);
        self.disconnect().await;

        let mut tasks = self.inner.remove_tasks.lock().await;
        for handle in tasks.drain(..) {
            handle.abort();
        }
    }

    /// Feed a raw inbound payload through the same path transport frames
    /// take. Malformed payloads are dropped and logged, never propagated.
    pub async fn handle_inbound(&self, raw: &str) {
        Inner::handle_inbound(&self.inner, raw).await;
    }

    /// Append a locally generated notification
    pub async fn add_notification(&self, payload: NotificationPayload) -> Notification {
        Inner::append(&self.inner, payload).await
    }

    /// Remove an entry by id; unread accounting is adjusted internally
    pub async fn remove_notification(&self, id: &str) -> bool {
        self.inner.list.write().await.remove(id).is_some()
    }

    pub async fn mark_as_read(&self, id: &str) -> bool {
        self.inner.list.write().await.mark_read(id)
    }

    pub async fn mark_all_as_read(&self) {
        self.inner.list.write().await.mark_all_read();
    }

    pub async fn clear_all(&self) {
        self.inner.list.write().await.clear();
    }

    pub async fn unread_count(&self) -> usize {
        self.inner.list.read().await.unread_count()
    }

    /// Snapshot of the notification list, newest first
    pub async fn notifications(&self) -> Vec<Notification> {
        self.inner.list.read().await.entries()
    }

    pub async fn connection_state(&self) -> ConnectionState {
        self.inner.connection.read().await.state
    }

    pub async fn reconnect_attempts(&self) -> u32 {
        self.inner.connection.read().await.reconnect_attempts
    }

    pub async fn is_connected(&self) -> bool {
        self.connection_state().await == ConnectionState::Connected
    }
}

impl Inner {
    /// Connection run loop: connect, pump frames, and on unplanned close
    /// retry at a fixed interval until the attempt ceiling is hit.
    async fn run(inner: Arc<Inner>, endpoint: String) {
        loop {
            {
                let mut conn = inner.connection.write().await;
                conn.state = ConnectionState::Connecting;
            }

            match inner.transport.connect(&endpoint).await {
                Ok(mut stream) => {
                    info!("connected to notification source at {}", endpoint);
                    {
                        let mut conn = inner.connection.write().await;
                        conn.state = ConnectionState::Connected;
                        conn.reconnect_attempts = 0;
                    }

                    while let Some(frame) = stream.next_frame().await {
                        Self::handle_inbound(&inner, &frame).await;
                    }
                    info!("notification connection closed by source");
                }
                Err(e) => {
                    warn!("failed to connect to notification source: {}", e);
                }
            }

            if inner.disposed.load(Ordering::SeqCst) {
                let mut conn = inner.connection.write().await;
                conn.state = ConnectionState::Disconnected;
                return;
            }

            // Unplanned close: bounded, fixed-interval retry
            let attempt = {
                let mut conn = inner.connection.write().await;
                if conn.reconnect_attempts >= inner.config.max_reconnect_attempts {
                    conn.state = ConnectionState::Error;
                    None
                } else {
                    conn.reconnect_attempts += 1;
                    conn.state = ConnectionState::Disconnected;
                    Some(conn.reconnect_attempts)
                }
            };

            let Some(attempt) = attempt else {
                warn!(
                    "giving up after {} reconnection attempts",
                    inner.config.max_reconnect_attempts
                );
                return;
            };

            info!(
                "reconnecting to notification source (attempt {}/{})",
                attempt, inner.config.max_reconnect_attempts
            );
            tokio::time::sleep(Duration::from_millis(inner.config.reconnect_interval_ms)).await;
        }
    }

    async fn handle_inbound(inner: &Arc<Inner>, raw: &str) {
        let payload = match Self::parse_inbound(raw) {
            Ok(Some(payload)) => payload,
            Ok(None) => return,
            Err(e) => {
                warn!("dropping inbound message: {}", e);
                return;
            }
        };

        Self::append(inner, payload).await;
    }

    /// Decode a raw frame into a notification payload. `Ok(None)` for valid
    /// envelopes of other types; anything undecodable is a
    /// [`FloodWatchError::MalformedMessage`].
    fn parse_inbound(raw: &str) -> FloodWatchResult<Option<NotificationPayload>> {
        let envelope: InboundEnvelope = serde_json::from_str(raw)
            .map_err(|e| FloodWatchError::MalformedMessage(e.to_string()))?;

        if envelope.kind != ENVELOPE_NOTIFICATION {
            debug!("ignoring inbound message of type '{}'", envelope.kind);
            return Ok(None);
        }

        let payload = serde_json::from_value(envelope.data)
            .map_err(|e| FloodWatchError::MalformedMessage(e.to_string()))?;
        Ok(Some(payload))
    }

    async fn append(inner: &Arc<Inner>, payload: NotificationPayload) -> Notification {
        let notification = Notification::new(payload);

        {
            let mut list = inner.list.write().await;
            list.push(notification.clone());
        }
        debug!(
            "notification appended: [{}] {}",
            notification.kind, notification.title
        );

        if let Some(callback) = &inner.on_notification {
            callback(&notification);
        }

        if inner.desktop.permission() == DesktopPermission::Granted {
            inner
                .desktop
                .show(&notification.title, &notification.message, &notification.id);
        }

        if !notification.persistent {
            Self::schedule_removal(inner, notification.id.clone()).await;
        }

        notification
    }

    /// Arrange removal of a non-persistent entry after the configured delay
    async fn schedule_removal(inner: &Arc<Inner>, id: String) {
        let delay = Duration::from_millis(inner.config.auto_remove_delay_ms);
        let task_inner = Arc::clone(inner);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if task_inner.disposed.load(Ordering::SeqCst) {
                return;
            }
            task_inner.list.write().await.remove(&id);
        });

        let mut tasks = inner.remove_tasks.lock().await;
        tasks.retain(|h| !h.is_finished());
        tasks.push(handle);
    }
}
