//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ██████╗   ██╗   ██╗  ██████╗   ██████╗   ██╗   ██╗
  ██╔══██╗  ██║   ██║  ██╔══██╗  ██╔══██╗  ╚██╗ ██╔╝
  ██████╔╝  ██║   ██║  ██║  ██║  ██║  ██║   ╚████╔╝
  ██╔══██╗  ██║   ██║  ██║  ██║  ██║  ██║    ╚██╔╝
  ██████╔╝  ╚██████╔╝  ██████╔╝  ██████╔╝     ██║
  ╚═════╝    ╚═════╝   ╚═════╝   ╚═════╝      ╚═╝
"#;

const TAGLINE: &str = "Smart interview practice and resume review";

pub fn render_splash(f: &mut Frame) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(Span::styled(TAGLINE, Style::default().fg(Color::White)).into());
    lines.push(
        Span::styled(
            format!("Version {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled("Press any key to continue", Style::default().fg(Color::DarkGray)).into(),
    );

    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}
