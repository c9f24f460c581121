//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::notifications::Toasts;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::interview::{InterviewScreen, render_interview};
use crate::ui::resume::{ResumeScreen, render_resume};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Where a key press asks the application to go next.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Navigation {
    Dashboard,
    Interview,
    Resume,
    Quit,
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Progress overview, with the settings modal on top when open.
    Dashboard(Box<DashboardState>),
    /// Mock interview session.
    Interview(Box<InterviewScreen>),
    /// Resume upload and analysis.
    Resume(Box<ResumeScreen>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Notifications raised by any screen, shown in the activity panel.
    toasts: Toasts,

    /// Where durable data lives.
    config: Config,

    /// Random source for the mock scoring.
    rng: StdRng,

    /// Whether to paint a background color
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(config: Config, ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            toasts: Toasts::new(),
            config,
            rng: StdRng::from_entropy(),
            with_background_color: ui_config.with_background_color,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }

    /// Switches screens. The screen being left is dropped with all its state.
    pub fn navigate(&mut self, target: Navigation) {
        self.current_screen = match target {
            Navigation::Dashboard => Screen::Dashboard(Box::new(DashboardState::new(
                self.with_background_color,
            ))),
            Navigation::Interview => Screen::Interview(Box::new(InterviewScreen::new())),
            Navigation::Resume => {
                Screen::Resume(Box::new(ResumeScreen::new(self.config.data_dir().to_path_buf())))
            }
            Navigation::Quit => return,
        };
        info!("Navigated to {:?}", target);
    }

    /// Feeds elapsed real time to the active screen's timers.
    pub fn advance(&mut self, dt: Duration) {
        match &mut self.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => state.advance(dt, &mut self.toasts),
            Screen::Interview(screen) => screen.advance(dt, &mut self.rng, &mut self.toasts),
            Screen::Resume(screen) => screen.advance(dt, &mut self.toasts),
        }
    }

    /// Handles one key press. Returns false when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        let navigation = match &mut self.current_screen {
            // Any key press skips the splash screen
            Screen::Splash => Some(Navigation::Dashboard),
            Screen::Dashboard(state) => state.handle_key(key, &self.config, &mut self.toasts),
            Screen::Interview(screen) => screen.handle_key(key, &mut self.toasts),
            Screen::Resume(screen) => screen.handle_key(key, &mut self.toasts),
        };

        match navigation {
            Some(Navigation::Quit) => false,
            Some(target) => {
                self.navigate(target);
                true
            }
            None => true,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let mut last_frame = Instant::now();

    // UI event loop
    loop {
        let now = Instant::now();
        app.advance(now.duration_since(last_frame));
        last_frame = now;

        terminal.draw(|f| render(f, &app))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration() {
                app.navigate(Navigation::Dashboard);
                continue;
            }
        }

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
pub fn render(f: &mut Frame, app: &App) {
    match &app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state, &app.toasts),
        Screen::Interview(screen) => render_interview(f, screen, &app.toasts),
        Screen::Resume(screen) => render_resume(f, screen, &app.toasts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::SessionPhase;
    use ratatui::backend::TestBackend;
    use tempfile::tempdir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app(dir: &tempfile::TempDir) -> App {
        App::new(Config::new(dir.path()), UIConfig::new(false))
    }

    fn draw(app: &App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
    }

    #[test]
    fn test_splash_skips_to_dashboard_on_any_key() {
        let dir = tempdir().unwrap();
        let mut app = app(&dir);
        assert!(matches!(app.screen(), Screen::Splash));
        assert!(app.handle_key(press(KeyCode::Char('x'))));
        assert!(matches!(app.screen(), Screen::Dashboard(_)));
    }

    #[test]
    fn test_dashboard_navigation() {
        let dir = tempdir().unwrap();
        let mut app = app(&dir);
        app.navigate(Navigation::Dashboard);

        app.handle_key(press(KeyCode::Char('i')));
        assert!(matches!(app.screen(), Screen::Interview(_)));
        app.handle_key(press(KeyCode::Esc));
        assert!(matches!(app.screen(), Screen::Dashboard(_)));

        app.handle_key(press(KeyCode::Char('r')));
        assert!(matches!(app.screen(), Screen::Resume(_)));
        app.handle_key(press(KeyCode::Esc));

        assert!(!app.handle_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let dir = tempdir().unwrap();
        let mut app = app(&dir);
        app.navigate(Navigation::Interview);
        assert!(!app.handle_key(ctrl('c')));
    }

    #[test]
    // Leaving the interview screen drops the session.
    fn test_navigation_discards_session_state() {
        let dir = tempdir().unwrap();
        let mut app = app(&dir);
        app.navigate(Navigation::Interview);
        app.handle_key(press(KeyCode::Char(' ')));
        app.handle_key(press(KeyCode::Enter));
        let Screen::Interview(screen) = app.screen() else {
            panic!("expected interview screen");
        };
        assert_eq!(screen.session.phase(), SessionPhase::InProgress);

        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Char('i')));
        let Screen::Interview(screen) = app.screen() else {
            panic!("expected interview screen");
        };
        assert_eq!(screen.session.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn test_every_screen_renders() {
        let dir = tempdir().unwrap();
        let mut app = app(&dir);
        draw(&app);
        for target in [Navigation::Dashboard, Navigation::Interview, Navigation::Resume] {
            app.navigate(target);
            draw(&app);
        }

        // Settings modal and an active interview
        app.navigate(Navigation::Dashboard);
        app.handle_key(press(KeyCode::Char('s')));
        draw(&app);
        app.navigate(Navigation::Interview);
        app.handle_key(press(KeyCode::Char(' ')));
        app.handle_key(press(KeyCode::Enter));
        app.advance(Duration::from_secs(200));
        draw(&app);
    }
}
