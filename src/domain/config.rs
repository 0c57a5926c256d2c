use serde::{Deserialize, Serialize};

/// FloodWatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloodWatchConfig {
    /// Session lifecycle configuration
    #[serde(default)]
    pub session: SessionTimeoutConfig,
    /// Realtime notification configuration
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Backend store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Inactivity timeout configuration for the session lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimeoutConfig {
    /// Minutes of inactivity before forced logout
    #[serde(default = "default_timeout_minutes")]
    pub timeout_minutes: u64,
    /// Minutes before logout at which the warning fires
    #[serde(default = "default_warning_minutes")]
    pub warning_minutes: u64,
}

/// Realtime notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Notification source endpoint, e.g. "notify.example.org:7070".
    /// Absence is a valid, permanent "no realtime features" mode.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Fixed delay between reconnection attempts in milliseconds
    #[serde(default = "default_reconnect_interval")]
    pub reconnect_interval_ms: u64,
    /// Reconnection attempts before giving up
    #[serde(default = "default_max_reconnect_attempts")]
    pub max_reconnect_attempts: u32,
    /// Maximum notifications retained in the list
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
    /// Delay before non-persistent notifications are removed, in milliseconds
    #[serde(default = "default_auto_remove_delay")]
    pub auto_remove_delay_ms: u64,
    /// Connection establishment timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

/// Backend store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store REST endpoint.
    /// Absence leaves the dashboard in offline mode; every read degrades
    /// to an empty result and every write to a local echo.
    #[serde(default)]
    pub base_url: Option<String>,
    /// API key sent with every request
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

// Default value functions
fn default_timeout_minutes() -> u64 {
    30
}

fn default_warning_minutes() -> u64 {
    5
}

fn default_reconnect_interval() -> u64 {
    3000
}

fn default_max_reconnect_attempts() -> u32 {
    5
}

fn default_max_notifications() -> usize {
    10
}

fn default_auto_remove_delay() -> u64 {
    5000
}

fn default_connect_timeout() -> u64 {
    3000
}

fn default_request_timeout() -> u64 {
    10000
}

impl Default for FloodWatchConfig {
    fn default() -> Self {
        Self {
            session: SessionTimeoutConfig::default(),
            realtime: RealtimeConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for SessionTimeoutConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: default_timeout_minutes(),
            warning_minutes: default_warning_minutes(),
        }
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            reconnect_interval_ms: default_reconnect_interval(),
            max_reconnect_attempts: default_max_reconnect_attempts(),
            max_notifications: default_max_notifications(),
            auto_remove_delay_ms: default_auto_remove_delay(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            request_timeout_ms: default_request_timeout(),
        }
    }
}
