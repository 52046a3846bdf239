//! Transient status line messages.

use std::time::{Duration, Instant};

/// A status line message with optional auto-clear.
///
/// Used for short notices such as "Reloading data.json" or the link of the
/// selected card.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Get the current message, expiring it first if it is too old.
    pub fn message(&mut self) -> Option<&str> {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after)
            && set_at.elapsed() >= duration
        {
            self.clear();
        }
        self.message.as_deref()
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();
        assert!(!status.has_message());

        status.set("Reloading");
        assert_eq!(status.peek(), Some("Reloading"));

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(50));
        status.set("Loaded 12 listings");
        assert!(status.message().is_some());

        thread::sleep(Duration::from_millis(60));
        assert!(status.message().is_none());
    }
}
