// Domain module - Configuration and error types
pub mod config;
pub mod error;

pub use config::{FloodWatchConfig, RealtimeConfig, SessionTimeoutConfig, StoreConfig};
pub use error::{FloodWatchError, FloodWatchResult};
