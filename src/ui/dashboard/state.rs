//! Dashboard state management
//!
//! Contains the dashboard state struct and its key handling

use crate::config::Config;
use crate::dashboard::{DashboardStats, PastSession, recent_sessions};
use crate::notifications::Toasts;
use crate::ui::app::Navigation;
use crate::ui::settings::SettingsModal;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Duration;

/// Progress overview with an optional settings modal on top.
#[derive(Debug)]
pub struct DashboardState {
    /// Headline statistics.
    pub stats: DashboardStats,
    /// Recent practice sessions, newest first.
    pub sessions: Vec<PastSession>,
    /// The API key modal, when open.
    pub settings: Option<SettingsModal>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            stats: DashboardStats::default(),
            sessions: recent_sessions(),
            settings: None,
            with_background_color,
        }
    }

    pub fn advance(&mut self, dt: Duration, toasts: &mut Toasts) {
        if let Some(settings) = &mut self.settings {
            settings.advance(dt, toasts);
        }
    }

    /// Handles a key press. The open modal takes every key.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        config: &Config,
        toasts: &mut Toasts,
    ) -> Option<Navigation> {
        if let Some(settings) = &mut self.settings {
            if settings.handle_key(key, toasts) {
                self.settings = None;
            }
            return None;
        }

        match key.code {
            KeyCode::Char('i') | KeyCode::Char('I') => Some(Navigation::Interview),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Navigation::Resume),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.settings = Some(SettingsModal::open(config, toasts));
                None
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Navigation::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    #[test]
    // Keys meant for the modal never navigate away.
    fn test_modal_captures_keys() {
        let dir = tempdir().unwrap();
        let config = Config::new(dir.path());
        let mut toasts = Toasts::new();
        let mut state = DashboardState::new(false);

        let press = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(state.handle_key(press('s'), &config, &mut toasts), None);
        assert!(state.settings.is_some());
        assert_eq!(state.handle_key(press('q'), &config, &mut toasts), None);
        assert_eq!(
            state.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &config, &mut toasts),
            None
        );
        assert!(state.settings.is_none());
        assert_eq!(
            state.handle_key(press('q'), &config, &mut toasts),
            Some(Navigation::Quit)
        );
    }
}
