// Access module - Role-based access control
pub mod context;
pub mod role;

pub use context::{AuthUser, SessionContext};
pub use role::{Permissions, Role, Section};
