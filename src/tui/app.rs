//! Application state and key handling.

use crate::config::GameConfig;
use crate::game::Mark;
use crate::host::SessionHost;
use crate::session::{Phase, Session};
use crate::theme::{Theme, ThemeName};
use crossterm::event::KeyCode;
use tracing::{debug, info, warn};

use super::input;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Pick a mark, toggle the opponent and the theme.
    SymbolSelect,
    /// The board.
    Playing,
}

/// Main application state.
pub struct App {
    config: GameConfig,
    theme: ThemeName,
    vs_ai: bool,
    human_mark: Mark,
    session: Session,
    host: SessionHost,
    cursor: usize,
    screen: Screen,
    status: String,
    should_quit: bool,
    reported: bool,
    epoch: u64,
}

impl App {
    /// Creates the application in the symbol-select screen.
    pub fn new(config: GameConfig, host: SessionHost) -> Self {
        let theme = *config.theme();
        Self {
            config,
            theme,
            vs_ai: true,
            human_mark: Mark::X,
            session: Session::new(None),
            host,
            cursor: 4,
            screen: Screen::SymbolSelect,
            status: String::new(),
            should_quit: false,
            reported: false,
            epoch: 0,
        }
    }

    /// The active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The resolved color table.
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// The selected theme name.
    pub fn theme_name(&self) -> ThemeName {
        self.theme
    }

    /// Whether the machine plays the second seat.
    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    /// The mark the player chose.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// The running session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for the driver's alarm callbacks.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// The session host (scores and result log).
    pub fn host(&self) -> &SessionHost {
        &self.host
    }

    /// The cursor index on the board.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Transient status message, empty when there is none.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Settings in effect.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Bumped on every session replacement, so the driver re-arms its
    /// alarms even when the new session starts on the same ply.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Routes a key press to the active screen.
    pub fn on_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::SymbolSelect => self.on_select_key(key),
            Screen::Playing => self.on_game_key(key),
        }
    }

    fn on_select_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('x') | KeyCode::Char('X') => self.start_game(Mark::X),
            KeyCode::Char('o') | KeyCode::Char('O') => self.start_game(Mark::O),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.vs_ai = !self.vs_ai;
                debug!(vs_ai = self.vs_ai, "Opponent toggled");
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    fn on_game_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                {
                    let index = digit as usize - 1;
                    self.cursor = index;
                    self.place_at(index);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.to_symbol_select(),
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('c') | KeyCode::Char('C') => self.reset_all(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    /// Starts a new game with the chosen mark. The machine, when
    /// enabled, always takes the opposing mark.
    pub fn start_game(&mut self, mark: Mark) {
        self.human_mark = mark;
        let ai_mark = if self.vs_ai { Some(mark.opponent()) } else { None };
        self.session = Session::new(ai_mark);
        self.screen = Screen::Playing;
        self.cursor = 4;
        self.status.clear();
        self.reported = false;
        self.epoch += 1;
        info!(human = %mark, vs_ai = self.vs_ai, "Game started");
    }

    /// Restarts the current game, keeping scores and the result log.
    pub fn restart(&mut self) {
        self.session.reset();
        self.cursor = 4;
        self.status.clear();
        self.reported = false;
        self.epoch += 1;
    }

    /// Returns to the symbol-select screen.
    pub fn to_symbol_select(&mut self) {
        self.session.reset();
        self.screen = Screen::SymbolSelect;
        self.status.clear();
        self.reported = false;
        self.epoch += 1;
    }

    /// Switches between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = self.theme.label(), "Theme switched");
    }

    /// Clears scores and the persisted result log, then returns to the
    /// symbol-select screen.
    pub fn reset_all(&mut self) {
        if let Err(e) = self.host.reset_all() {
            warn!(error = %e, "Failed to clear result log");
            self.status = format!("Could not clear history: {e}");
            return;
        }
        self.to_symbol_select();
    }

    /// Requests shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn place_at(&mut self, index: usize) {
        // Rejections are silent, matching the board's click behavior;
        // the log keeps the reason.
        if let Err(e) = self.session.apply_move(index) {
            debug!(index, error = %e, "Move rejected");
        }
    }

    /// Forwards a freshly terminal outcome to the host, exactly once
    /// per game.
    pub fn report_if_terminated(&mut self) {
        if self.reported {
            return;
        }
        if let Phase::Terminated(outcome) = self.session.phase() {
            self.reported = true;
            if let Err(e) = self.host.on_terminated(outcome) {
                warn!(error = %e, "Failed to persist result");
                self.status = format!("Could not save result: {e}");
            }
        }
    }
}
