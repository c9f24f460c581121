//! Activity log panel component
//!
//! Renders the notification history, newest first

use super::super::utils::{format_compact_timestamp, notification_style};
use crate::notifications::Toasts;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity panel.
pub fn render_logs_panel(f: &mut Frame, area: Rect, toasts: &Toasts) {
    // Account for borders and padding
    let log_count = (area.height.saturating_sub(3) as usize).max(1);

    let log_lines: Vec<Line> = toasts
        .iter()
        .filter(|n| n.should_display())
        .rev()
        .take(log_count)
        .map(|n| {
            let (icon, color) = notification_style(n);
            Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&n.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(n.msg.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from(Span::styled(
            "No activity yet",
            Style::default().fg(Color::DarkGray),
        ))])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(
        log_paragraph.block(logs_block).wrap(Wrap { trim: true }),
        area,
    );
}
