// Session module - Inactivity-based session lifecycle
pub mod activity;
pub mod manager;
pub mod state;

pub use activity::{activity_channel, ActivityEvent};
pub use manager::{SessionCallback, SessionManager, SignOut};
pub use state::{SessionPhase, SessionPolicy, SessionState};
