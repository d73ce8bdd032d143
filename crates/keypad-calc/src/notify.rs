//! User notifications
//!
//! Division by zero is the one condition the user must be told about. Each
//! frontend decides how: a browser alert, a terminal status line, or a
//! recorded message in tests.

/// Blocking user notification
pub trait Notifier {
    /// Shows `message` to the user
    fn notify(&mut self, message: &str);
}

/// Notifier that keeps every message, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    /// Creates an empty notifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages shown so far
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Most recent message
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Forgets all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!(message, "user notified");
        self.messages.push(message.to_string());
    }
}
