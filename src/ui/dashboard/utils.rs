//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::analysis::ScoreTier;
use crate::logging::LogLevel;
use crate::notifications::{Notification, NotificationKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for a score badge based on its tier
pub fn score_color(score: u8) -> Color {
    match ScoreTier::of(score) {
        ScoreTier::High => Color::LightGreen,
        ScoreTier::Medium => Color::Yellow,
        ScoreTier::Low => Color::LightRed,
    }
}

/// Icon and color for a notification in the activity log
pub fn notification_style(notification: &Notification) -> (&'static str, Color) {
    match (notification.kind, notification.log_level) {
        (NotificationKind::Success, _) => ("✅", Color::LightGreen),
        (NotificationKind::Error, _) => ("❌", Color::LightRed),
        (NotificationKind::Info, LogLevel::Warn) => ("⚠", Color::Yellow),
        (NotificationKind::Info, _) => ("•", Color::Gray),
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// A rectangle of the given percentage size centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-01-20 14:05:33"), "01-20 14:05");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_score_color_tiers() {
        assert_eq!(score_color(92), Color::LightGreen);
        assert_eq!(score_color(80), Color::LightGreen);
        assert_eq!(score_color(79), Color::Yellow);
        assert_eq!(score_color(59), Color::LightRed);
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, area);
        assert_eq!(inner.width, 60);
        assert!(inner.x >= 20 && inner.y >= 12);
    }
}
