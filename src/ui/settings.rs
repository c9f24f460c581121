//! API key settings modal.
//!
//! One input per service. Saving writes the whole credential pair; the
//! connection test checks the saved key, not the text being edited.

use crate::config::Config;
use crate::credentials::{ConnectionTester, CredentialStore, Service, mask_key};
use crate::notifications::Toasts;
use crate::storage::FileStore;
use crate::ui::dashboard::utils::centered_rect;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use std::collections::HashMap;
use std::time::Duration;
use strum::IntoEnumIterator;

const DEMO_NOTICE: &str =
    "Demo mode: keys are kept on this machine and connection tests are simulated.";

#[derive(Debug)]
pub struct SettingsModal {
    credentials: CredentialStore<FileStore>,
    tester: ConnectionTester,
    inputs: HashMap<Service, String>,
    focused: Service,
    show_keys: bool,
}

impl SettingsModal {
    /// Opens the modal with the inputs prefilled from the saved keys.
    pub fn open(config: &Config, toasts: &mut Toasts) -> Self {
        let credentials = CredentialStore::load(config.open_store(), toasts);
        let inputs = Service::iter()
            .map(|s| (s, credentials.get(s).unwrap_or_default().to_string()))
            .collect();
        Self {
            credentials,
            tester: ConnectionTester::new(),
            inputs,
            focused: Service::OpenAi,
            show_keys: false,
        }
    }

    #[cfg(test)]
    pub fn focused(&self) -> Service {
        self.focused
    }

    pub fn input(&self, service: Service) -> &str {
        self.inputs.get(&service).map(String::as_str).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn tester(&self) -> &ConnectionTester {
        &self.tester
    }

    pub fn advance(&mut self, dt: Duration, toasts: &mut Toasts) {
        self.tester.advance(dt, &self.credentials, toasts);
    }

    /// Handles a key press. Returns true when the modal should close.
    pub fn handle_key(&mut self, key: KeyEvent, toasts: &mut Toasts) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focused = match self.focused {
                    Service::OpenAi => Service::ElevenLabs,
                    Service::ElevenLabs => Service::OpenAi,
                };
            }
            KeyCode::Char('s') if ctrl => {
                let value = self.input(self.focused).to_string();
                // Failures are already reported as notifications
                let _ = self.credentials.save(self.focused, &value, toasts);
            }
            KeyCode::Char('t') if ctrl => {
                if let Err(e) = self.tester.begin(self.focused) {
                    debug!("Connection test not started: {}", e);
                }
            }
            KeyCode::Char('v') if ctrl => self.show_keys = !self.show_keys,
            KeyCode::Backspace => {
                if let Some(input) = self.inputs.get_mut(&self.focused) {
                    input.pop();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                self.inputs.entry(self.focused).or_default().push(c);
            }
            _ => {}
        }
        false
    }
}

fn service_lines(modal: &SettingsModal, service: Service) -> Vec<Line<'static>> {
    let focused = modal.focused == service;
    let input = modal.input(service);

    let shown = if input.is_empty() {
        Span::styled(
            service.key_placeholder().to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else if modal.show_keys {
        Span::raw(input.to_string())
    } else {
        Span::raw("•".repeat(input.chars().count()))
    };

    let status = if modal.tester.is_testing() && modal.tester.status(service).is_none() {
        Span::styled(" Testing...", Style::default().fg(Color::Yellow))
    } else {
        match modal.tester.status(service) {
            Some(true) => Span::styled(" Connected", Style::default().fg(Color::LightGreen)),
            Some(false) => Span::styled(" Failed", Style::default().fg(Color::LightRed)),
            None => Span::raw(""),
        }
    };

    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let saved = modal
        .credentials
        .get(service)
        .map(mask_key)
        .unwrap_or_else(|| "not set".to_string());

    vec![
        Line::from(vec![
            Span::styled(format!("{marker}{}", service.label()), label_style),
            status,
        ]),
        Line::from(vec![Span::raw("  Key: "), shown]),
        Line::from(Span::styled(
            format!("  Saved: {saved}"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!("  Used for: {}", service.usage()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

/// Render the settings modal over whatever is underneath.
pub fn render_settings(f: &mut Frame, area: Rect, modal: &SettingsModal) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title("API KEY SETTINGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightMagenta))
        .padding(Padding::horizontal(1));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(inner);

    let lines: Vec<Line> = Service::iter()
        .flat_map(|s| service_lines(modal, s))
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

    f.render_widget(
        Paragraph::new(DEMO_NOTICE)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let visibility = if modal.show_keys { "Hide" } else { "Show" };
    f.render_widget(
        Paragraph::new(format!(
            "[Tab] Switch  [Ctrl+S] Save  [Ctrl+T] Test  [Ctrl+V] {visibility}  [Esc] Close"
        ))
        .style(Style::default().fg(Color::Cyan)),
        chunks[2],
    );
}
