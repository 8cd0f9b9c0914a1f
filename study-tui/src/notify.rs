use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Warning,
        }
    }

    #[allow(dead_code)]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    shown_at: Instant,
}

/// Toast queue rendered over the main view. Entries expire on their own.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop toasts that have been visible for longer than [`TOAST_DURATION`].
    pub fn prune(&mut self, now: Instant) {
        self.queue
            .retain(|toast| now.duration_since(toast.shown_at) < TOAST_DURATION);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter().rev().take(MAX_VISIBLE).map(|t| &t.notification)
    }

    /// Close the newest toast before it expires. Returns whether one was open.
    pub fn dismiss_latest(&mut self) -> bool {
        self.queue.pop_back().is_some()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<Notification> {
        self.queue.iter().map(|t| t.notification.clone()).collect()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error | NotificationKind::Warning => {
                tracing::warn!(message = %notification.message, "notify")
            }
            _ => tracing::info!(message = %notification.message, "notify"),
        }
        self.queue.push_back(Toast {
            notification,
            shown_at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_is_listed_first() {
        let mut toasts = Toasts::new();
        toasts.notify(Notification::success("first"));
        toasts.notify(Notification::error("second"));

        let visible: Vec<_> = toasts.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(visible, vec!["second", "first"]);
    }

    #[test]
    fn prune_drops_expired_toasts() {
        let mut toasts = Toasts::new();
        toasts.notify(Notification::info("hello"));

        toasts.prune(Instant::now());
        assert_eq!(toasts.len(), 1);

        toasts.prune(Instant::now() + TOAST_DURATION);
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_closes_newest_first() {
        let mut toasts = Toasts::new();
        toasts.notify(Notification::success("first"));
        toasts.notify(Notification::error("second"));

        assert!(toasts.dismiss_latest());
        let visible: Vec<_> = toasts.visible().map(|n| n.message.as_str()).collect();
        assert_eq!(visible, vec!["first"]);

        assert!(toasts.dismiss_latest());
        assert!(!toasts.dismiss_latest());
        assert!(toasts.is_empty());
    }

    #[test]
    fn only_a_few_toasts_are_visible() {
        let mut toasts = Toasts::new();
        for i in 0..10 {
            toasts.notify(Notification::info(format!("toast {i}")));
        }
        assert_eq!(toasts.visible().count(), MAX_VISIBLE);
        assert_eq!(toasts.len(), 10);
    }
}
