//! Notification System
//!
//! Toast-style messages raised by the screens, kept in a bounded activity log.

use crate::consts::cli_consts::MAX_NOTIFICATIONS;
use crate::logging::{LogLevel, get_rust_log_level, should_log};
use chrono::Local;
use std::collections::VecDeque;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub msg: String,
    pub timestamp: String,
    pub log_level: LogLevel,
}

impl Notification {
    fn new(kind: NotificationKind, msg: String, log_level: LogLevel) -> Self {
        Self {
            kind,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            log_level,
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, msg.into(), LogLevel::Info)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, msg.into(), LogLevel::Error)
    }

    pub fn info_with_level(msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(NotificationKind::Info, msg.into(), log_level)
    }

    /// Checks the entry against the `RUST_LOG` threshold.
    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }

    /// Success and error toasts are always shown. Info entries only when their
    /// level reaches `threshold`.
    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        self.kind != NotificationKind::Info || should_log(self.log_level, threshold)
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.kind, self.timestamp, self.msg)
    }
}

/// Bounded queue of notifications, oldest evicted first.
#[derive(Debug, Clone)]
pub struct Toasts {
    capacity: usize,
    entries: VecDeque<Notification>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::with_capacity(MAX_NOTIFICATIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notification);
    }

    pub fn success(&mut self, msg: impl Into<String>) {
        self.push(Notification::success(msg));
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.push(Notification::error(msg));
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Notification> {
        self.entries.back()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.entries.iter()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The oldest entry is evicted once the capacity is reached.
    fn test_toasts_evict_oldest() {
        let mut toasts = Toasts::with_capacity(2);
        toasts.success("first");
        toasts.error("second");
        toasts.success("third");

        let messages: Vec<&str> = toasts.iter().map(|n| n.msg.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
        assert_eq!(toasts.last().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    // With RUST_LOG=error only success and error toasts remain.
    fn test_info_entries_follow_log_threshold() {
        let error = Notification::error("Please provide an answer");
        let success = Notification::success("Recording started");
        let warn = Notification::info_with_level("stored keys ignored", LogLevel::Warn);
        let info = Notification::info_with_level("keys loaded", LogLevel::Info);

        assert!(error.should_display_at(LogLevel::Error));
        assert!(success.should_display_at(LogLevel::Error));
        assert!(!warn.should_display_at(LogLevel::Error));
        assert!(!info.should_display_at(LogLevel::Error));

        assert!(warn.should_display_at(LogLevel::Warn));
        assert!(!info.should_display_at(LogLevel::Warn));
        assert!(info.should_display_at(LogLevel::Info));
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let n = Notification::error("boom");
        let rendered = n.to_string();
        assert!(rendered.starts_with("Error ["));
        assert!(rendered.ends_with("boom"));
    }
}
