// Core module - Session lifecycle, realtime notifications, access control, store
pub mod access;
pub mod notify;
pub mod session;
pub mod store;
