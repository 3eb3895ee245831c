//! Transient success/error signal shown over every screen.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: Instant,
}

/// Holds at most one notification and hides it after a fixed delay.
///
/// Raising a new notification replaces the current one and restarts the
/// delay. There is no queue.
#[derive(Debug, Clone)]
pub struct NotificationChannel {
    current: Option<Notification>,
    timeout: Duration,
}

impl NotificationChannel {
    pub fn new(timeout: Duration) -> Self {
        Self { current: None, timeout }
    }

    pub fn raise(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.raise_at(kind, message, Instant::now());
    }

    pub fn raise_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            kind,
            message: message.into(),
            raised_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.raise(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.raise(NotificationKind::Error, message);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn visible(&self) -> Option<&Notification> {
        self.visible_at(Instant::now())
    }

    /// The current notification unless its delay has run out at `now`.
    pub fn visible_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.raised_at) < self.timeout)
    }

    /// Drop the notification once expired. Returns `true` if one was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.is_some() && self.visible_at(now).is_none() {
            self.current = None;
            return true;
        }
        false
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::constants::NOTIFICATION_TIMEOUT_SECS))
    }
}
