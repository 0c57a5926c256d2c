use crate::core::session::{
    activity::ActivityEvent,
    state::{SessionPhase, SessionPolicy, SessionState},
};
use crate::domain::error::FloodWatchResult;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, RwLock};
use tracing::{debug, info, trace, warn};

/// External sign-out operation invoked on hard timeout.
///
/// Consumers treat failures as fail-open: the logout callback still fires
/// and the UI leaves the authenticated state regardless.
#[async_trait]
pub trait SignOut: Send + Sync {
    async fn sign_out(&self) -> FloodWatchResult<()>;
}

/// UI callback invoked from a timer task
pub type SessionCallback = Arc<dyn Fn() + Send + Sync>;

/// The pair of pending timers for the current activity window.
///
/// At most one of each may exist at any instant; every reset cancels the
/// pair before scheduling a new one.
#[derive(Default)]
struct TimerPair {
    warning: Option<tokio::task::JoinHandle<()>>,
    logout: Option<tokio::task::JoinHandle<()>>,
}

impl TimerPair {
    fn cancel(&mut self) {
        if let Some(handle) = self.warning.take() {
            handle.abort();
        }
        if let Some(handle) = self.logout.take() {
            handle.abort();
        }
    }
}

struct Inner {
    policy: SessionPolicy,
    state: RwLock<SessionState>,
    timers: Mutex<TimerPair>,
    /// Bumped on every reset; stale timers notice the mismatch and bail
    epoch: AtomicU64,
    disposed: AtomicBool,
    sign_out: Arc<dyn SignOut>,
    on_warning: SessionCallback,
    on_timeout: SessionCallback,
    pump: Mutex<Option<tokio::task::JoinHandle<()>>>,
}

/// Inactivity-based session lifecycle manager.
///
/// Tracks user activity, arms a warning timer and a hard-logout timer, and
/// drives the `Active -> Warned -> Expired` lifecycle. Constructed when the
/// session-bearing UI mounts; [`SessionManager::shutdown`] must be called at
/// unmount so no callback fires after the owning UI is gone.
pub struct SessionManager {
    inner: Arc<Inner>,
}

impl SessionManager {
    /// Create a manager and arm both timers for a fresh activity window
    pub async fn new(
        policy: SessionPolicy,
        sign_out: Arc<dyn SignOut>,
        on_warning: SessionCallback,
        on_timeout: SessionCallback,
    ) -> Self {
        let manager = Self {
            inner: Arc::new(Inner {
                policy,
                state: RwLock::new(SessionState::new()),
                timers: Mutex::new(TimerPair::default()),
                epoch: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
                sign_out,
                on_warning,
                on_timeout,
                pump: Mutex::new(None),
            }),
        };

        Inner::reset(&manager.inner).await;
        debug!(
            "session manager armed: timeout {}s, warning at {}s",
            policy.timeout().as_secs(),
            policy.warning_delay().as_secs()
        );
        manager
    }

    /// Record a recognized user-activity signal.
    ///
    /// Cancels both pending timers and schedules a fresh pair; last write
    /// wins. Ignored once the session has expired.
    pub async fn record_activity(&self) {
        Inner::reset(&self.inner).await;
    }

    /// Explicit session extension in response to the warning countdown.
    /// Semantically identical to [`SessionManager::record_activity`].
    pub async fn extend_session(&self) {
        Inner::reset(&self.inner).await;
    }

    /// Whole seconds until forced logout; never negative
    pub async fn time_remaining(&self) -> u64 {
        let state = self.inner.state.read().await;
        state.time_remaining(self.inner.policy.timeout())
    }

    /// Current lifecycle phase
    pub async fn phase(&self) -> SessionPhase {
        self.inner.state.read().await.phase
    }

    /// True once the warning callback fired for the current activity window
    pub async fn is_warning_active(&self) -> bool {
        self.inner.state.read().await.warning_armed
    }

    /// Consume activity signals from the hosting UI, resetting the timers
    /// on each. The pump task is cancelled by [`SessionManager::shutdown`].
    pub async fn watch_activity(&self, mut events: mpsc::UnboundedReceiver<ActivityEvent>) {
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                trace!("activity signal: {}", event);
                Inner::reset(&inner).await;
            }
        });

        let mut pump = self.inner.pump.lock().await;
        if let Some(previous) = pump.replace(handle) {
            previous.abort();
        }
    }

    /// Tear the manager down: cancel both timers, stop the activity pump,
    /// and guarantee no callback fires afterwards.
    pub async fn shutdown(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);

        let mut timers = self.inner.timers.lock().await;
        timers.cancel();

        if let Some(pump) = self.inner.pump.lock().await.take() {
            pump.abort();
        }

        debug!("session manager shut down");
    }
}

impl Inner {
    /// Start a fresh activity window: reset state, cancel the pending timer
    /// pair, schedule a new one. The timers lock serializes concurrent
    /// resets so no two logout timers can be pending at once.
    async fn reset(inner: &Arc<Inner>) {
        if inner.disposed.load(Ordering::SeqCst) {
            return;
        }

        let mut timers = inner.timers.lock().await;

        let epoch = {
            let mut state = inner.state.write().await;
            if state.phase == SessionPhase::Expired {
                // Terminal; re-armed only by constructing a fresh manager.
                return;
            }
            state.reset();
            inner.epoch.fetch_add(1, Ordering::SeqCst) + 1
        };

        timers.cancel();
        timers.warning = Some(tokio::spawn(Self::warning_timer(Arc::clone(inner), epoch)));
        timers.logout = Some(tokio::spawn(Self::logout_timer(Arc::clone(inner), epoch)));
    }

    fn expired(inner: &Inner, epoch: u64) -> bool {
        inner.disposed.load(Ordering::SeqCst) || inner.epoch.load(Ordering::SeqCst) != epoch
    }

    async fn warning_timer(inner: Arc<Inner>, epoch: u64) {
        tokio::time::sleep(inner.policy.warning_delay()).await;

        {
            let mut state = inner.state.write().await;
            if Self::expired(&inner, epoch) {
                return;
            }
            if state.phase != SessionPhase::Active || state.warning_armed {
                return;
            }
            state.warning_armed = true;
            state.phase = SessionPhase::Warned;
        }

        debug!("inactivity warning threshold crossed");
        (inner.on_warning)();
    }

    async fn logout_timer(inner: Arc<Inner>, epoch: u64) {
        tokio::time::sleep(inner.policy.timeout()).await;

        {
            let mut state = inner.state.write().await;
            if Self::expired(&inner, epoch) {
                return;
            }
            if state.phase == SessionPhase::Expired {
                return;
            }
            state.phase = SessionPhase::Expired;
        }

        info!("session timed out, signing out");
        if let Err(e) = inner.sign_out.sign_out().await {
            // Fail-open: the UI must leave the authenticated state even
            // when the external sign-out call fails.
            warn!("sign-out failed, proceeding with logout: {}", e);
        }

        if inner.disposed.load(Ordering::SeqCst) {
            return;
        }
        (inner.on_timeout)();
    }
}
