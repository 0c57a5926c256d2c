// Notify module - Realtime notification client
pub mod connection;
pub mod desktop;
pub mod list;
pub mod notifier;
pub mod transport;

pub use connection::{ConnectionState, ConnectionStatus};
pub use desktop::{DesktopNotifier, DesktopPermission, NoDesktop};
pub use list::{Notification, NotificationKind, NotificationList, NotificationPayload};
pub use notifier::{NotificationCallback, RealtimeNotifier};
pub use transport::{InboundEnvelope, InboundStream, NotificationTransport};
