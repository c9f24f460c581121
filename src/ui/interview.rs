//! Mock interview screen.

use crate::interview::{
    InterviewSession, ROLES, SessionPhase, SimulatedMicrophone, format_time,
};
use crate::notifications::Toasts;
use crate::ui::app::Navigation;
use crate::ui::dashboard::components::{footer, header, logs};
use crate::ui::dashboard::utils::score_color;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap};
use std::time::Duration;

#[derive(Debug)]
pub struct InterviewScreen {
    pub session: InterviewSession,
    /// Highlighted entry in the role list.
    pub role_cursor: usize,
}

impl Default for InterviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewScreen {
    pub fn new() -> Self {
        Self {
            session: InterviewSession::new(Box::new(SimulatedMicrophone::new())),
            role_cursor: 0,
        }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, dt: Duration, rng: &mut R, toasts: &mut Toasts) {
        self.session.advance(dt, rng, toasts);
    }

    pub fn handle_key(&mut self, key: KeyEvent, toasts: &mut Toasts) -> Option<Navigation> {
        if key.code == KeyCode::Esc {
            return Some(Navigation::Dashboard);
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self.session.phase() {
            SessionPhase::NotStarted | SessionPhase::Completed => match key.code {
                KeyCode::Up => self.role_cursor = self.role_cursor.saturating_sub(1),
                KeyCode::Down => self.role_cursor = (self.role_cursor + 1).min(ROLES.len() - 1),
                KeyCode::Char(' ') => self.session.select_role(ROLES[self.role_cursor]),
                KeyCode::Enter => {
                    // Validation failures are already reported as notifications
                    let _ = self.session.start(toasts);
                }
                _ => {}
            },
            SessionPhase::InProgress => match key.code {
                KeyCode::Char('r') if ctrl => self.session.toggle_recording(toasts),
                KeyCode::Enter => {
                    let _ = self.session.submit(toasts);
                }
                KeyCode::Backspace => self.session.pop_char(),
                KeyCode::Char(c) if !ctrl => self.session.push_char(c),
                _ => {}
            },
            SessionPhase::Reviewing => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                    self.session.next_question(toasts);
                }
            }
            SessionPhase::Submitting => {}
        }
        None
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

fn render_role_selection(f: &mut Frame, area: Rect, screen: &InterviewScreen) {
    let selected = screen.session.selected_role();
    let mut lines: Vec<Line> = ROLES
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let cursor = if i == screen.role_cursor { "▶ " } else { "  " };
            let check = if selected == Some(*role) { "[x] " } else { "[ ] " };
            let style = if i == screen.role_cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{cursor}{check}{role}"), style))
        })
        .collect();

    if screen.session.phase() == SessionPhase::Completed {
        lines.insert(
            0,
            Line::from(Span::styled(
                "Interview complete. Pick a role to practice again.",
                Style::default().fg(Color::LightGreen),
            )),
        );
        lines.insert(1, Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(panel("SELECT A ROLE")), area);
}

fn render_question(f: &mut Frame, area: Rect, session: &InterviewSession) {
    let question = session.current_question();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("#{} ", question.id),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" {} ", question.category),
                Style::default().fg(Color::Black).bg(Color::LightBlue),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", question.difficulty),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("QUESTION")),
        area,
    );
}

fn render_answer(f: &mut Frame, area: Rect, session: &InterviewSession) {
    let mut lines = Vec::new();
    if session.is_recording() {
        lines.push(Line::from(Span::styled(
            "● Recording...",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )));
    }
    if session.is_processing() {
        lines.push(Line::from(Span::styled(
            "Analyzing your answer...",
            Style::default().fg(Color::Yellow),
        )));
    }
    if session.answer().is_empty() && session.phase() == SessionPhase::InProgress {
        lines.push(Line::from(Span::styled(
            "Type your answer here...",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(session.answer().to_string()));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("YOUR ANSWER")),
        area,
    );
}

fn render_side_panel(f: &mut Frame, area: Rect, session: &InterviewSession) {
    let mut lines = Vec::new();
    if let Some(feedback) = session.feedback() {
        lines.push(Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                format!("{}%", feedback.score),
                Style::default()
                    .fg(score_color(feedback.score))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", feedback.sentiment),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Strengths",
            Style::default().fg(Color::LightGreen),
        )));
        lines.extend(feedback.strengths.iter().map(|s| Line::from(format!("✓ {s}"))));
        lines.push(Line::from(Span::styled(
            "Areas for improvement",
            Style::default().fg(Color::Yellow),
        )));
        lines.extend(feedback.improvements.iter().map(|s| Line::from(format!("→ {s}"))));
        lines.push(Line::from(Span::styled(
            format!("Keywords: {}", feedback.keywords.join(", ")),
            Style::default().fg(Color::Gray),
        )));
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(panel("FEEDBACK")),
            area,
        );
    } else {
        lines.extend(
            session
                .current_question()
                .tips
                .iter()
                .map(|tip| Line::from(format!("• {tip}"))),
        );
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(panel("TIPS")),
            area,
        );
    }
}

fn render_session(f: &mut Frame, area: Rect, session: &InterviewSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Fill(1),
        ])
        .split(area);

    let remaining = session.time_remaining();
    let gauge_color = if remaining <= 30 {
        Color::LightRed
    } else {
        Color::LightBlue
    };
    let mut label = format!(
        "Question {} of {}  ·  {}",
        session.question_number(),
        session.total_questions(),
        format_time(remaining)
    );
    if session.timeout_submissions() > 0 {
        label.push_str(&format!("  ·  {} timed out", session.timeout_submissions()));
    }
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color))
        .percent(session.elapsed_percent().min(100))
        .label(label);
    f.render_widget(gauge, chunks[0]);

    render_question(f, chunks[1], session);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_answer(f, body[0], session);
    render_side_panel(f, body[1], session);
}

fn key_hints(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::NotStarted | SessionPhase::Completed => {
            "[↑↓] Move | [Space] Select role | [Enter] Start | [Esc] Back"
        }
        SessionPhase::InProgress => "[Enter] Submit | [Ctrl+R] Record | [Esc] Back",
        SessionPhase::Submitting => "Analyzing... | [Esc] Back",
        SessionPhase::Reviewing => "[Enter/N] Next question | [Esc] Back",
    }
}

pub fn render_interview(f: &mut Frame, screen: &InterviewScreen, toasts: &Toasts) {
    let session = &screen.session;
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    let subtitle = match session.selected_role() {
        Some(role) if session.is_active() => format!("{role} Interview"),
        _ => "Practice with timed questions and instant feedback".to_string(),
    };
    header::render_header(f, main_chunks[0], "Mock Interview", &subtitle);

    if session.is_active() {
        render_session(f, main_chunks[1], session);
    } else {
        render_role_selection(f, main_chunks[1], screen);
    }

    logs::render_logs_panel(f, main_chunks[2], toasts);
    footer::render_footer(f, main_chunks[3], key_hints(session.phase()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_start_without_role_is_rejected() {
        let mut screen = InterviewScreen::new();
        let mut toasts = Toasts::new();
        screen.handle_key(press(KeyCode::Enter), &mut toasts);
        assert_eq!(screen.session.phase(), SessionPhase::NotStarted);
        assert_eq!(
            toasts.last().unwrap().msg,
            "Please select a job role first"
        );
    }

    #[test]
    fn test_cursor_selects_role() {
        let mut screen = InterviewScreen::new();
        let mut toasts = Toasts::new();
        screen.handle_key(press(KeyCode::Up), &mut toasts);
        assert_eq!(screen.role_cursor, 0);
        for _ in 0..20 {
            screen.handle_key(press(KeyCode::Down), &mut toasts);
        }
        assert_eq!(screen.role_cursor, ROLES.len() - 1);
        screen.handle_key(press(KeyCode::Char(' ')), &mut toasts);
        assert_eq!(screen.session.selected_role(), Some("Marketing Specialist"));
    }

    #[test]
    fn test_typed_answer_flows_to_review() {
        let mut screen = InterviewScreen::new();
        let mut toasts = Toasts::new();
        let mut rng = StdRng::seed_from_u64(7);
        screen.handle_key(press(KeyCode::Char(' ')), &mut toasts);
        screen.handle_key(press(KeyCode::Enter), &mut toasts);

        for c in "I led a migration".chars() {
            screen.handle_key(press(KeyCode::Char(c)), &mut toasts);
        }
        screen.handle_key(press(KeyCode::Backspace), &mut toasts);
        assert_eq!(screen.session.answer(), "I led a migratio");

        screen.handle_key(press(KeyCode::Enter), &mut toasts);
        assert_eq!(screen.session.phase(), SessionPhase::Submitting);
        // Typing is ignored while the answer is analyzed
        screen.handle_key(press(KeyCode::Char('x')), &mut toasts);
        assert_eq!(screen.session.answer(), "I led a migratio");

        screen.advance(Duration::from_secs(2), &mut rng, &mut toasts);
        assert_eq!(screen.session.phase(), SessionPhase::Reviewing);
        screen.handle_key(press(KeyCode::Char('n')), &mut toasts);
        assert_eq!(screen.session.question_number(), 2);
    }

    #[test]
    fn test_escape_returns_to_dashboard() {
        let mut screen = InterviewScreen::new();
        let mut toasts = Toasts::new();
        assert_eq!(
            screen.handle_key(press(KeyCode::Esc), &mut toasts),
            Some(Navigation::Dashboard)
        );
    }
}
