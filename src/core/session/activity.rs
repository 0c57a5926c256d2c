use tokio::sync::mpsc;

/// User-activity signal recognized by the session manager.
///
/// The hosting UI forwards document-level interaction events over an
/// unbounded channel; any variant counts as activity and resets the
/// inactivity timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    PointerDown,
    PointerMove,
    KeyPress,
    Scroll,
    TouchStart,
    Click,
}

impl ActivityEvent {
    /// All recognized activity signals
    pub fn all() -> &'static [ActivityEvent] {
        &[
            ActivityEvent::PointerDown,
            ActivityEvent::PointerMove,
            ActivityEvent::KeyPress,
            ActivityEvent::Scroll,
            ActivityEvent::TouchStart,
            ActivityEvent::Click,
        ]
    }
}

impl std::fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityEvent::PointerDown => write!(f, "pointer-down"),
            ActivityEvent::PointerMove => write!(f, "pointer-move"),
            ActivityEvent::KeyPress => write!(f, "key-press"),
            ActivityEvent::Scroll => write!(f, "scroll"),
            ActivityEvent::TouchStart => write!(f, "touch-start"),
            ActivityEvent::Click => write!(f, "click"),
        }
    }
}

/// Create the channel pair connecting an activity source to the manager
pub fn activity_channel() -> (
    mpsc::UnboundedSender<ActivityEvent>,
    mpsc::UnboundedReceiver<ActivityEvent>,
) {
    mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_listed() {
        assert_eq!(ActivityEvent::all().len(), 6);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(ActivityEvent::PointerDown.to_string(), "pointer-down");
        assert_eq!(ActivityEvent::Click.to_string(), "click");
    }

    #[tokio::test]
    async fn test_activity_channel() {
        let (tx, mut rx) = activity_channel();
        tx.send(ActivityEvent::Scroll).unwrap();
        assert_eq!(rx.recv().await, Some(ActivityEvent::Scroll));
    }
}
