/// Connection lifecycle state of the realtime notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected and not trying to connect
    Disconnected,
    /// Connection establishment in progress
    Connecting,
    /// Live connection to the notification source
    Connected,
    /// Retry ceiling reached; only a manual connect resumes
    Error,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "disconnected"),
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::Connected => write!(f, "connected"),
            ConnectionState::Error => write!(f, "error"),
        }
    }
}

/// Reconnect bookkeeping, kept as explicit fields so the retry ceiling is
/// directly testable
#[derive(Debug)]
pub struct ConnectionStatus {
    pub state: ConnectionState,
    /// Reset to 0 on successful connect, incremented on each unplanned close
    pub reconnect_attempts: u32,
}

impl ConnectionStatus {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            reconnect_attempts: 0,
        }
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::new()
    }
}
