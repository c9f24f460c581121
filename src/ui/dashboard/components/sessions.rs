//! Recent sessions and quick actions panel

use super::super::utils::score_color;
use crate::dashboard::PastSession;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("[I]", "Start a mock interview"),
    ("[R]", "Analyze your resume"),
    ("[S]", "Configure API keys"),
];

pub fn render_sessions_panel(f: &mut Frame, area: Rect, sessions: &[PastSession]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(QUICK_ACTIONS.len() as u16 + 2),
            Constraint::Fill(1),
        ])
        .split(area);

    let actions: Vec<Line> = QUICK_ACTIONS
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(
                    format!("{key} "),
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*label),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(actions).block(
            Block::default()
                .title("QUICK ACTIONS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        ),
        chunks[0],
    );

    let mut lines = Vec::with_capacity(sessions.len() * 2);
    for session in sessions {
        lines.push(Line::from(vec![
            Span::styled(
                format!("#{} ", session.id),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                session.role,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{}%", session.score),
                Style::default().fg(score_color(session.score)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", session.kind, session.date),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("RECENT SESSIONS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        ),
        chunks[1],
    );
}
