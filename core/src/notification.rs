//! Single-slot, self-expiring user feedback.

use std::time::{Duration, Instant};

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    text: String,
    severity: Severity,
    /// `None` when the lifetime is too long to represent; such a
    /// notification stays until replaced.
    expires_at: Option<Instant>,
}

impl Notification {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Holds at most one notification; showing a new one replaces the old.
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<Notification>,
    ttl: Duration,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn show(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(Notification {
            text: text.into(),
            severity,
            expires_at: now.checked_add(self.ttl),
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the current notification if its lifetime has passed.
    pub fn clear_expired(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
    }
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}
