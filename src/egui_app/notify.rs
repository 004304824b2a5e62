//! Transient notifications
//!
//! One notification slot with a fixed time-to-live. Emitting while an
//! earlier notification is still showing replaces both the message and the
//! deadline, so the newest outcome always gets the full display window.

use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Holds at most one live notification and its expiry deadline.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<(Notification, Instant)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.emit(Notification::success(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.emit(Notification::error(message));
    }

    pub fn emit(&mut self, notification: Notification) {
        self.emit_at(notification, Instant::now());
    }

    /// Emit with an explicit clock, replacing whatever was showing.
    pub fn emit_at(&mut self, notification: Notification, now: Instant) {
        tracing::debug!("notification: {}", notification.message);
        self.current = Some((notification, now + NOTIFICATION_TTL));
    }

    /// The stored notification, if any. Call `clear_expired` first when
    /// freshness matters; this does not consult the clock.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// The notification that should be on screen at `now`.
    pub fn visible(&self, now: Instant) -> Option<&Notification> {
        match &self.current {
            Some((n, deadline)) if now < *deadline => Some(n),
            _ => None,
        }
    }

    /// Drop the notification once its deadline has passed.
    pub fn clear_expired(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.current {
            if now >= *deadline {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_error_set_severity() {
        let mut notifier = Notifier::new();
        notifier.success("saved");
        assert_eq!(notifier.current().map(|n| n.severity), Some(Severity::Success));

        notifier.error("failed");
        assert_eq!(notifier.current().map(|n| n.severity), Some(Severity::Error));
    }

    #[test]
    fn test_visible_until_ttl_elapses() {
        let mut notifier = Notifier::new();
        let t0 = Instant::now();
        notifier.emit_at(Notification::success("saved"), t0);

        assert!(notifier.visible(t0).is_some());
        assert!(notifier.visible(t0 + Duration::from_millis(2999)).is_some());
        assert!(notifier.visible(t0 + NOTIFICATION_TTL).is_none());
    }

    #[test]
    fn test_new_emit_supersedes_earlier_deadline() {
        let mut notifier = Notifier::new();
        let t0 = Instant::now();
        notifier.emit_at(Notification::success("first"), t0);
        notifier.emit_at(Notification::error("second"), t0 + Duration::from_millis(2000));

        // Past the first deadline but inside the second's window.
        let later = t0 + Duration::from_millis(4000);
        let visible = notifier.visible(later);
        assert_eq!(visible.map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn test_clear_expired_only_drops_past_deadline() {
        let mut notifier = Notifier::new();
        let t0 = Instant::now();
        notifier.emit_at(Notification::success("saved"), t0);

        notifier.clear_expired(t0 + Duration::from_millis(1000));
        assert!(notifier.current().is_some());

        notifier.clear_expired(t0 + NOTIFICATION_TTL);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_frame_poll_shows_live_and_drops_expired() {
        let mut notifier = Notifier::new();
        let t0 = Instant::now();
        notifier.emit_at(Notification::success("saved"), t0);

        // The banner's per-frame sequence: dispose, then read.
        let mid = t0 + Duration::from_millis(1500);
        notifier.clear_expired(mid);
        assert_eq!(
            notifier.visible(mid).map(|n| n.message.as_str()),
            Some("saved")
        );

        let after = t0 + NOTIFICATION_TTL;
        notifier.clear_expired(after);
        assert!(notifier.visible(after).is_none());
        assert!(notifier.current().is_none());
    }
}
