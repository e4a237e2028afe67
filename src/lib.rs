//! Noughts: terminal tic-tac-toe with an unbeatable minimax opponent.
//!
//! # Architecture
//!
//! - **Game model** (`game`): board types, outcome rules, minimax search
//! - **Session** (`session`): the turn/timer state machine that owns all
//!   board mutation
//! - **Host** (`host`): score tally and persisted result log, fed by
//!   termination events
//! - **TUI** (`tui`): ratatui frontend and the cooperative driver loop
//!
//! # Example
//!
//! ```
//! use noughts::{Mark, Session};
//!
//! let mut session = Session::new(Some(Mark::O));
//! session.apply_move(4).unwrap(); // the player takes the center
//! assert!(session.ai_turn().is_some()); // minimax answers for O
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod history;
mod host;
mod score;
mod session;
mod theme;

pub mod tui;

// Crate-level exports - Settings
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game model
pub use game::{Board, Mark, Outcome, SearchResult, Square, WIN_LINES, best_move, evaluate};

// Crate-level exports - Result log
pub use history::{HistoryEntry, HistoryError, HistoryStore, RecordedResult};

// Crate-level exports - Session host
pub use host::SessionHost;

// Crate-level exports - Score tally
pub use score::ScoreBoard;

// Crate-level exports - Session state machine
pub use session::{MoveError, Phase, PlyAlarm, Session};

// Crate-level exports - Themes
pub use theme::{Theme, ThemeName};
