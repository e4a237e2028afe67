//! Terminal UI: setup, the cooperative driver loop, and ply-keyed
//! scheduling of the turn clock and the AI wake-up.

mod app;
mod input;
mod ui;

pub use app::{App, Screen};

use crate::config::GameConfig;
use crate::history::HistoryStore;
use crate::host::SessionHost;
use crate::session::{Phase, PlyAlarm};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs the terminal UI until the user quits.
pub async fn run(config: GameConfig) -> Result<()> {
    info!("Starting noughts TUI");

    let history = HistoryStore::open(config.history_path())?;
    let host = SessionHost::new(history);
    let mut app = App::new(config, host);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = game_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Draw, poll input, check alarms; single-threaded and cooperative.
///
/// Both deferred operations (the turn clock and the AI thinking
/// delay) are [`PlyAlarm`]s armed against the current ply and dropped
/// on every ply transition, so a callback that outlives its ply never
/// touches the board.
async fn game_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    let turn_len = Duration::from_secs(*app.config().turn_seconds());
    let ai_delay = Duration::from_millis(*app.config().ai_delay_ms());

    let mut clock: Option<PlyAlarm> = None;
    let mut ai_wake: Option<PlyAlarm> = None;
    let mut armed_for: Option<(u64, usize)> = None;

    loop {
        let now = Instant::now();

        // Re-arm alarms whenever the session enters a new ply (or a
        // new game replaces the session).
        if app.screen() == Screen::Playing {
            let key = (app.epoch(), app.session().ply());
            if armed_for != Some(key) {
                armed_for = Some(key);
                if matches!(app.session().phase(), Phase::AwaitingMove(_)) {
                    debug!(ply = key.1, "Arming turn clock");
                    clock = Some(PlyAlarm::arm(key.1, turn_len, now));
                    ai_wake = if app.session().ai_to_move() {
                        debug!(ply = key.1, "Arming AI wake");
                        Some(PlyAlarm::arm(key.1, ai_delay, now))
                    } else {
                        None
                    };
                } else {
                    clock = None;
                    ai_wake = None;
                }
            }
        } else {
            clock = None;
            ai_wake = None;
            armed_for = None;
        }

        let time_left = clock.map(|alarm| alarm.remaining(now));
        terminal.draw(|frame| ui::draw(frame, app, time_left))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key.code);
        }

        let now = Instant::now();
        if let Some(alarm) = clock.as_mut()
            && alarm.expire(now, app.session().ply())
        {
            debug!("Turn clock expired");
            app.session_mut().on_timeout();
        }
        if let Some(alarm) = ai_wake.as_mut()
            && alarm.expire(now, app.session().ply())
        {
            app.session_mut().ai_turn();
        }

        app.report_if_terminated();

        if app.should_quit() {
            info!("Quitting");
            return Ok(());
        }

        tokio::time::sleep(Duration::from_millis(30)).await;
    }
}
