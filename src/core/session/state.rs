use std::time::Duration;
use tokio::time::Instant;

use crate::domain::config::SessionTimeoutConfig;
use crate::domain::error::{FloodWatchError, FloodWatchResult};

/// Two-stage inactivity policy: warn first, then log out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    timeout: Duration,
    warning: Duration,
}

impl SessionPolicy {
    /// Create a policy from minute values.
    ///
    /// Fails fast when the warning window does not fit strictly inside the
    /// timeout window.
    pub fn new(timeout_minutes: u64, warning_minutes: u64) -> FloodWatchResult<Self> {
        if timeout_minutes == 0 || warning_minutes == 0 {
            return Err(FloodWatchError::Config {
                message: "session timeout and warning minutes must be positive".to_string(),
            });
        }

        if warning_minutes >= timeout_minutes {
            return Err(FloodWatchError::Config {
                message: format!(
                    "warning minutes ({}) must be strictly less than timeout minutes ({})",
                    warning_minutes, timeout_minutes
                ),
            });
        }

        Ok(Self {
            timeout: Duration::from_secs(timeout_minutes * 60),
            warning: Duration::from_secs(warning_minutes * 60),
        })
    }

    /// Create a policy from the configuration section
    pub fn from_config(config: &SessionTimeoutConfig) -> FloodWatchResult<Self> {
        Self::new(config.timeout_minutes, config.warning_minutes)
    }

    /// Full inactivity window before forced logout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Length of the warning window preceding logout
    pub fn warning(&self) -> Duration {
        self.warning
    }

    /// Delay from last activity to the warning firing
    pub fn warning_delay(&self) -> Duration {
        self.timeout - self.warning
    }
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// User is active, both timers pending
    Active,
    /// Warning fired, countdown to logout running
    Warned,
    /// Logout timer fired; terminal until a fresh manager is constructed
    Expired,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionPhase::Active => write!(f, "Active"),
            SessionPhase::Warned => write!(f, "Warned"),
            SessionPhase::Expired => write!(f, "Expired"),
        }
    }
}

/// Mutable session state, owned exclusively by the manager
#[derive(Debug)]
pub struct SessionState {
    /// Monotonic instant of the most recent recognized activity signal
    pub last_activity: Instant,
    /// True once the warning callback fired for the current activity window
    pub warning_armed: bool,
    /// Current lifecycle phase
    pub phase: SessionPhase,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            last_activity: Instant::now(),
            warning_armed: false,
            phase: SessionPhase::Active,
        }
    }

    /// Reset to the start of a fresh activity window
    pub fn reset(&mut self) {
        self.last_activity = Instant::now();
        self.warning_armed = false;
        self.phase = SessionPhase::Active;
    }

    /// Whole seconds until forced logout; never negative
    pub fn time_remaining(&self, timeout: Duration) -> u64 {
        timeout.saturating_sub(self.last_activity.elapsed()).as_secs()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_validation() {
        assert!(SessionPolicy::new(30, 5).is_ok());
        assert!(SessionPolicy::new(2, 1).is_ok());

        // warning must be strictly less than timeout
        assert!(SessionPolicy::new(5, 5).is_err());
        assert!(SessionPolicy::new(5, 10).is_err());

        // both must be positive
        assert!(SessionPolicy::new(0, 0).is_err());
        assert!(SessionPolicy::new(30, 0).is_err());
    }

    #[test]
    fn test_policy_windows() {
        let policy = SessionPolicy::new(30, 5).unwrap();
        assert_eq!(policy.timeout(), Duration::from_secs(30 * 60));
        assert_eq!(policy.warning(), Duration::from_secs(5 * 60));
        assert_eq!(policy.warning_delay(), Duration::from_secs(25 * 60));
    }

    #[test]
    fn test_policy_from_config() {
        let config = SessionTimeoutConfig::default();
        let policy = SessionPolicy::from_config(&config).unwrap();
        assert_eq!(policy.warning_delay(), Duration::from_secs(25 * 60));

        let bad = SessionTimeoutConfig {
            timeout_minutes: 5,
            warning_minutes: 7,
        };
        assert!(SessionPolicy::from_config(&bad).is_err());
    }

    #[tokio::test]
    async fn test_state_reset() {
        let mut state = SessionState::new();
        state.warning_armed = true;
        state.phase = SessionPhase::Warned;

        state.reset();
        assert!(!state.warning_armed);
        assert_eq!(state.phase, SessionPhase::Active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_time_remaining_floor() {
        let state = SessionState::new();
        let timeout = Duration::from_secs(60);

        assert_eq!(state.time_remaining(timeout), 60);

        tokio::time::advance(Duration::from_secs(90)).await;
        assert_eq!(state.time_remaining(timeout), 0);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(SessionPhase::Active.to_string(), "Active");
        assert_eq!(SessionPhase::Warned.to_string(), "Warned");
        assert_eq!(SessionPhase::Expired.to_string(), "Expired");
    }
}
