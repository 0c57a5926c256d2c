use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Severity or category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// Payload for a notification about to be appended, either transport
/// delivered or locally generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Never auto-expires; removed only by explicit user action
    #[serde(default)]
    pub persistent: bool,
}

/// A single entry in the notification list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    pub persistent: bool,
}

impl Notification {
    pub fn new(payload: NotificationPayload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: payload.kind,
            title: payload.title,
            message: payload.message,
            timestamp: Utc::now(),
            read: false,
            persistent: payload.persistent,
        }
    }
}

/// Capacity-bounded, insertion-ordered (newest first) notification list
/// with read tracking.
///
/// Invariants: length never exceeds capacity (oldest entries are evicted
/// first), and `unread_count` always equals the number of entries with
/// `read == false` -- including across evictions.
#[derive(Debug)]
pub struct NotificationList {
    entries: VecDeque<Notification>,
    capacity: usize,
    unread: usize,
}

impl NotificationList {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            unread: 0,
        }
    }

    /// Append a notification at the front, evicting the oldest entry when
    /// the list is at capacity
    pub fn push(&mut self, notification: Notification) {
        while self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                if !evicted.read {
                    self.unread = self.unread.saturating_sub(1);
                }
            }
        }

        if !notification.read {
            self.unread += 1;
        }
        self.entries.push_front(notification);
    }

    /// Remove an entry by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Notification> {
        let index = self.entries.iter().position(|n| n.id == id)?;
        let removed = self.entries.remove(index)?;
        if !removed.read {
            self.unread = self.unread.saturating_sub(1);
        }
        Some(removed)
    }

    /// Mark a single entry as read; returns false for unknown ids
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                if !entry.read {
                    entry.read = true;
                    self.unread = self.unread.saturating_sub(1);
                }
                true
            }
            None => false,
        }
    }

    /// Mark every entry as read
    pub fn mark_all_read(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.read = true;
        }
        self.unread = 0;
    }

    /// Empty the list
    pub fn clear(&mut self) {
        self.entries.clear();
        self.unread = 0;
    }

    pub fn unread_count(&self) -> usize {
        self.unread
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the entries, newest first
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    /// Newest entry, if any
    pub fn newest(&self) -> Option<&Notification> {
        self.entries.front()
    }
}
