/// Platform notification permission state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopPermission {
    /// Undetermined; the notifier requests permission once at construction
    Default,
    Granted,
    Denied,
}

/// Desktop/platform notification display seam.
///
/// When permission is granted the notifier mirrors each newly appended
/// notification through this trait.
pub trait DesktopNotifier: Send + Sync {
    fn permission(&self) -> DesktopPermission;

    /// Ask the platform for permission; only called from the `Default` state
    fn request_permission(&self);

    /// Display a system notification mirroring a list entry
    fn show(&self, title: &str, body: &str, tag: &str);
}

/// Disabled desktop notifications; used when the platform offers none
pub struct NoDesktop;

impl DesktopNotifier for NoDesktop {
    fn permission(&self) -> DesktopPermission {
        DesktopPermission::Denied
    }

    fn request_permission(&self) {}

    fn show(&self, _title: &str, _body: &str, _tag: &str) {}
}
