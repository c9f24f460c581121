//! Dashboard main renderer

use super::components::{footer, header, logs, sessions, stats};
use super::state::DashboardState;
use crate::notifications::Toasts;
use crate::ui::settings::render_settings;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState, toasts: &Toasts) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(
        f,
        main_chunks[0],
        "Interview Buddy",
        "Track your practice and keep improving",
    );
    stats::render_stats(f, main_chunks[1], &state.stats);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[2]);

    sessions::render_sessions_panel(f, content_chunks[0], &state.sessions);
    logs::render_logs_panel(f, content_chunks[1], toasts);
    footer::render_footer(
        f,
        main_chunks[3],
        "[I] Interview | [R] Resume | [S] Settings | [Q] Quit",
    );

    if let Some(settings) = &state.settings {
        render_settings(f, f.area(), settings);
    }
}
