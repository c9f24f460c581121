//! Statistics cards component

use super::super::utils::score_color;
use crate::dashboard::DashboardStats;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(card, area);
}

/// Render the four headline statistics side by side.
pub fn render_stats(f: &mut Frame, area: Rect, stats: &DashboardStats) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    render_card(
        f,
        cards[0],
        "Total Interviews",
        stats.total_interviews.to_string(),
        Color::LightBlue,
    );
    render_card(
        f,
        cards[1],
        "Average Score",
        format!("{}%", stats.average_score),
        score_color(stats.average_score),
    );
    render_card(
        f,
        cards[2],
        "Resume Score",
        format!("{}%", stats.resume_score),
        score_color(stats.resume_score),
    );
    render_card(
        f,
        cards[3],
        "Improvement",
        format!("+{}%", stats.improvement_trend),
        Color::LightGreen,
    );
}
