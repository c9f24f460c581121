//! Resume upload and analysis screen.

use crate::notifications::Toasts;
use crate::resume::{ResumeFile, ResumeReview};
use crate::ui::app::Navigation;
use crate::ui::dashboard::components::{footer, header, logs};
use crate::ui::dashboard::utils::score_color;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResumeField {
    Path,
    JobDescription,
}

#[derive(Debug)]
pub struct ResumeScreen {
    pub review: ResumeReview,
    pub path_input: String,
    pub focus: ResumeField,
    /// Where exported reports are written.
    export_dir: PathBuf,
}

impl ResumeScreen {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            review: ResumeReview::new(),
            path_input: String::new(),
            focus: ResumeField::Path,
            export_dir,
        }
    }

    pub fn advance(&mut self, dt: Duration, toasts: &mut Toasts) {
        self.review.advance(dt, toasts);
    }

    fn select_typed_path(&mut self, toasts: &mut Toasts) {
        let typed = self.path_input.trim();
        if typed.is_empty() {
            return;
        }
        let path = Path::new(typed);
        if !path.is_file() {
            warn!("Resume path {} does not exist", path.display());
            toasts.error(format!("File not found: {}", path.display()));
            return;
        }
        let _ = self.review.select_file(ResumeFile::from_path(path), toasts);
    }

    pub fn handle_key(&mut self, key: KeyEvent, toasts: &mut Toasts) -> Option<Navigation> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Some(Navigation::Dashboard),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    ResumeField::Path => ResumeField::JobDescription,
                    ResumeField::JobDescription => ResumeField::Path,
                };
            }
            KeyCode::Char('a') if ctrl => {
                // Validation failures are already reported as notifications
                let _ = self.review.analyze(toasts);
            }
            KeyCode::Char('x') if ctrl => {
                self.review.reset();
                self.path_input.clear();
            }
            KeyCode::Char('s') if ctrl => {
                let _ = self.review.export_report(&self.export_dir, toasts);
            }
            KeyCode::Enter => match self.focus {
                ResumeField::Path => self.select_typed_path(toasts),
                ResumeField::JobDescription => self.review.push_job_description_char('\n'),
            },
            KeyCode::Backspace => match self.focus {
                ResumeField::Path => {
                    self.path_input.pop();
                }
                ResumeField::JobDescription => self.review.pop_job_description_char(),
            },
            KeyCode::Char(c) if !ctrl => match self.focus {
                ResumeField::Path => self.path_input.push(c),
                ResumeField::JobDescription => self.review.push_job_description_char(c),
            },
            _ => {}
        }
        None
    }
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::LightMagenta } else { Color::Cyan };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
}

fn render_inputs(f: &mut Frame, area: Rect, screen: &ResumeScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Fill(1)])
        .split(area);

    let selected = match screen.review.selected_file() {
        Some(file) => Span::styled(
            format!("✓ {}", file.name),
            Style::default().fg(Color::LightGreen),
        ),
        None => Span::styled("No file selected", Style::default().fg(Color::DarkGray)),
    };
    let upload = vec![
        Line::from(vec![Span::raw("Path: "), Span::raw(screen.path_input.clone())]),
        Line::from(""),
        Line::from(selected),
        Line::from(Span::styled(
            "Supports PDF and Word documents",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(upload).block(panel(
            "UPLOAD RESUME",
            screen.focus == ResumeField::Path,
        )),
        chunks[0],
    );

    let description = if screen.review.job_description().is_empty() {
        Paragraph::new(Span::styled(
            "Paste the job description for targeted analysis (optional)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(screen.review.job_description().to_string())
    };
    f.render_widget(
        description.wrap(Wrap { trim: false }).block(panel(
            "JOB DESCRIPTION",
            screen.focus == ResumeField::JobDescription,
        )),
        chunks[1],
    );
}

fn heading(text: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn render_results(f: &mut Frame, area: Rect, review: &ResumeReview) {
    let Some(analysis) = review.analysis() else {
        let status = if review.is_analyzing() {
            Span::styled("Analyzing resume...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(
                "Upload a resume and press Ctrl+A to analyze it",
                Style::default().fg(Color::DarkGray),
            )
        };
        f.render_widget(
            Paragraph::new(Line::from(status)).block(panel("ANALYSIS", false)),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Overall "),
            Span::styled(
                format!("{}%", analysis.overall_score),
                Style::default()
                    .fg(score_color(analysis.overall_score))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", analysis.overall_verdict()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::raw("ATS     "),
            Span::styled(
                format!("{}%", analysis.ats_score),
                Style::default()
                    .fg(score_color(analysis.ats_score))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", analysis.ats_verdict()),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(""),
        heading("Sections", Color::White),
    ];
    for (name, section) in analysis.sections.iter() {
        lines.push(Line::from(vec![
            Span::raw(format!("{name:<12}")),
            Span::styled(
                format!("{}%", section.score),
                Style::default().fg(score_color(section.score)),
            ),
        ]));
        lines.extend(section.feedback.iter().map(|fb| {
            Line::from(Span::styled(
                format!("  {fb}"),
                Style::default().fg(Color::Gray),
            ))
        }));
    }

    lines.push(Line::from(""));
    lines.push(heading("Keywords found", Color::LightGreen));
    lines.push(Line::from(analysis.keywords.present.join(", ")));
    lines.push(heading("Missing keywords", Color::LightRed));
    lines.push(Line::from(analysis.keywords.missing.join(", ")));

    lines.push(Line::from(""));
    lines.push(heading("Strengths", Color::LightGreen));
    lines.extend(analysis.strengths.iter().map(|s| Line::from(format!("✓ {s}"))));
    lines.push(heading("Improvements", Color::Yellow));
    lines.extend(analysis.improvements.iter().map(|s| Line::from(format!("→ {s}"))));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("ANALYSIS", false)),
        area,
    );
}

pub fn render_resume(f: &mut Frame, screen: &ResumeScreen, toasts: &Toasts) {
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

    header::render_header(
        f,
        main_chunks[0],
        "Resume Analyzer",
        "Score your resume and find what to improve",
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);
    render_inputs(f, body[0], screen);
    render_results(f, body[1], &screen.review);

    logs::render_logs_panel(f, main_chunks[2], toasts);
    footer::render_footer(
        f,
        main_chunks[3],
        "[Tab] Field | [Enter] Load file | [Ctrl+A] Analyze | [Ctrl+S] Save report | [Ctrl+X] Reset | [Esc] Back",
    );
}
