//! Transient notifications ("toasts") shown after paste and copy actions.
//!
//! Toasts auto-dismiss after their duration and can be dismissed early.
//! Rendering is left to the front-end; this module only tracks which
//! toasts are visible at a given instant.

use std::time::{Duration, Instant};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Warning,
}

impl NotifyKind {
    pub fn icon(self) -> &'static str {
        match self {
            NotifyKind::Success => "✓",
            NotifyKind::Error => "✕",
            NotifyKind::Warning => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotifyKind,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Receives user-facing notifications.
pub trait NotificationSink {
    fn notify(&mut self, message: &str, kind: NotifyKind, duration: Duration);

    /// Shows a notification after `delay`. Sinks without a clock show it now.
    fn notify_later(
        &mut self,
        delay: Duration,
        message: &str,
        kind: NotifyKind,
        duration: Duration,
    ) {
        let _ = delay;
        self.notify(message, kind, duration);
    }
}

/// Ordered stack of visible toasts plus toasts scheduled for later.
#[derive(Debug)]
pub struct ToastQueue {
    default_duration: Duration,
    visible: Vec<Notification>,
    pending: Vec<Notification>,
}

impl ToastQueue {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    pub fn new(default_duration: Duration) -> Self {
        Self {
            default_duration,
            visible: vec![],
            pending: vec![],
        }
    }

    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Shows a toast now with the default duration.
    pub fn show(&mut self, message: impl Into<String>, kind: NotifyKind) -> Uuid {
        self.show_at(Instant::now(), message, kind, self.default_duration)
    }

    pub fn show_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        kind: NotifyKind,
        duration: Duration,
    ) -> Uuid {
        let toast = Self::make(now, message, kind, duration);
        let id = toast.id;
        self.visible.push(toast);
        id
    }

    /// Queues a toast that becomes visible at `at`.
    pub fn schedule(
        &mut self,
        at: Instant,
        message: impl Into<String>,
        kind: NotifyKind,
        duration: Duration,
    ) -> Uuid {
        let toast = Self::make(at, message, kind, duration);
        let id = toast.id;
        self.pending.push(toast);
        id
    }

    /// Removes a visible or pending toast. Returns whether it existed.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.visible.len() + self.pending.len();
        self.visible.retain(|t| t.id != id);
        self.pending.retain(|t| t.id != id);
        before != self.visible.len() + self.pending.len()
    }

    /// Dismisses the most recently shown toast.
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.visible.pop()
    }

    /// Promotes due pending toasts, then drops expired ones.
    pub fn expire(&mut self, now: Instant) {
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.shown_at <= now);
        self.pending = waiting;
        self.visible.extend(due);
        self.visible.retain(|t| !t.is_expired(now));
    }

    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.pending.is_empty()
    }

    fn make(
        shown_at: Instant,
        message: impl Into<String>,
        kind: NotifyKind,
        duration: Duration,
    ) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            shown_at,
            duration,
        }
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, message: &str, kind: NotifyKind, duration: Duration) {
        self.show_at(Instant::now(), message, kind, duration);
    }

    fn notify_later(
        &mut self,
        delay: Duration,
        message: &str,
        kind: NotifyKind,
        duration: Duration,
    ) {
        self.schedule(Instant::now() + delay, message, kind, duration);
    }
}
