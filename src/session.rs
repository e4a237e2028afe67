//! Game session state machine.
//!
//! The session owns the authoritative snapshot log, the active turn,
//! and the cached terminal outcome. Every board mutation flows through
//! the operations here; the TUI driver is a thin scheduler around
//! them, re-arming a [`PlyAlarm`] pair (turn clock, AI wake) on each
//! ply transition.

use crate::game::{Board, Mark, Outcome, Square, best_move, evaluate};
use derive_more::{Display, Error};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Session phase: either waiting on a mark or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the given mark to move.
    AwaitingMove(Mark),
    /// The session ended with the given outcome. Only [`Session::reset`]
    /// leaves this phase.
    Terminated(Outcome),
}

/// Rejected move attempts.
///
/// All are local validation failures; none change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The session already terminated.
    #[display("the game is already over")]
    GameOver,
    /// Index outside 0..=8.
    #[display("position {_0} is out of bounds")]
    OutOfBounds(#[error(not(source))] usize),
    /// The target square is occupied.
    #[display("square {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    /// The active mark is under machine control.
    #[display("it is {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Mark),
}

/// A single game session.
///
/// `log[0]` is the empty board and `log[ply]` is the current snapshot.
/// Each move ply differs from its predecessor in exactly one square; a
/// timeout skip ply duplicates the board and only swaps the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    log: Vec<Board>,
    ply: usize,
    phase: Phase,
    ai_mark: Option<Mark>,
}

impl Session {
    /// Creates a session. `ai_mark` is the side the machine controls,
    /// or `None` for two players at the keyboard.
    #[instrument]
    pub fn new(ai_mark: Option<Mark>) -> Self {
        info!(?ai_mark, "Creating session");
        Self {
            log: vec![Board::new()],
            ply: 0,
            phase: Phase::AwaitingMove(Mark::X),
            ai_mark,
        }
    }

    /// The current board snapshot.
    pub fn board(&self) -> &Board {
        &self.log[self.ply]
    }

    /// All snapshots so far, oldest first.
    pub fn log(&self) -> &[Board] {
        &self.log
    }

    /// The current ply pointer.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The machine-controlled mark, if any.
    pub fn ai_mark(&self) -> Option<Mark> {
        self.ai_mark
    }

    /// The mark to move, or `None` once terminated.
    pub fn active_mark(&self) -> Option<Mark> {
        match self.phase {
            Phase::AwaitingMove(mark) => Some(mark),
            Phase::Terminated(_) => None,
        }
    }

    /// The terminal outcome, or `None` while the game runs.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Terminated(outcome) => Some(outcome),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Returns true once the session terminated.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    /// Returns true while the active mark is the machine's.
    pub fn ai_to_move(&self) -> bool {
        matches!(self.phase, Phase::AwaitingMove(mark) if Some(mark) == self.ai_mark)
    }

    /// Applies a move for the player at the keyboard.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the session is over, the index is out
    /// of range, the square is occupied, or the active mark is the
    /// machine's. The session is unchanged on every error path.
    #[instrument(skip(self), fields(ply = self.ply))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        let active = match self.phase {
            Phase::AwaitingMove(mark) => mark,
            Phase::Terminated(_) => {
                debug!(index, "Move attempted after game over");
                return Err(MoveError::GameOver);
            }
        };

        if index >= 9 {
            warn!(index, "Move attempted out of bounds");
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board().is_empty(index) {
            debug!(index, "Move attempted on an occupied square");
            return Err(MoveError::Occupied(index));
        }
        if self.ai_mark == Some(active) {
            debug!(index, active = %active, "Move attempted on the machine's turn");
            return Err(MoveError::NotYourTurn(active));
        }

        self.place(active, index);
        Ok(())
    }

    /// Records a skip ply after the turn clock ran out.
    ///
    /// The board content is unchanged, the ply advances, and the turn
    /// passes. A skip never terminates the session; both sides may time
    /// out indefinitely. Returns true when a skip ply was recorded.
    #[instrument(skip(self), fields(ply = self.ply))]
    pub fn on_timeout(&mut self) -> bool {
        let active = match self.phase {
            Phase::AwaitingMove(mark) => mark,
            Phase::Terminated(_) => {
                debug!("Timeout fired after game over");
                return false;
            }
        };

        // A winning move can land right before the deadline; the board
        // decides, not the clock.
        if evaluate(self.board()).is_terminal() {
            debug!("Timeout raced a terminal board");
            return false;
        }

        let snapshot = self.log[self.ply].clone();
        self.log.push(snapshot);
        self.ply += 1;
        self.phase = Phase::AwaitingMove(active.opponent());
        info!(skipped = %active, "Turn skipped on timeout");
        true
    }

    /// Runs the minimax opponent for the current turn.
    ///
    /// No-op returning `None` when the session is over, no mark is
    /// machine-controlled, or the active mark is not the machine's:
    /// a stale wake-up must not touch the board. Otherwise places the
    /// searched move and returns its index.
    #[instrument(skip(self), fields(ply = self.ply))]
    pub fn ai_turn(&mut self) -> Option<usize> {
        let active = match self.phase {
            Phase::AwaitingMove(mark) => mark,
            Phase::Terminated(_) => {
                debug!("AI wake after game over");
                return None;
            }
        };
        let ai = self.ai_mark?;
        if ai != active {
            debug!(active = %active, "AI wake on the player's turn");
            return None;
        }

        let chosen = best_move(self.board(), ai, ai.opponent());
        let score = chosen.score();
        let index = match chosen.position() {
            Some(index) => index,
            None => {
                warn!("Search returned no position");
                return None;
            }
        };
        if !self.board().is_empty(index) {
            warn!(index, "Search chose an occupied square");
            return None;
        }

        debug!(index, score, "AI move selected");
        self.place(ai, index);
        Some(index)
    }

    /// Discards the game and returns to the initial state.
    ///
    /// Scores and the persisted result log are the host's to reset,
    /// never this operation's.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.log = vec![Board::new()];
        self.ply = 0;
        self.phase = Phase::AwaitingMove(Mark::X);
    }

    fn place(&mut self, mark: Mark, index: usize) {
        let mut next = self.log[self.ply].clone();
        next.set(index, Square::Occupied(mark)).unwrap();
        self.log.push(next);
        self.ply += 1;
        debug!(ply = self.ply, board = %self.board().display(), "Snapshot appended");

        match evaluate(self.board()) {
            Outcome::Undecided => {
                self.phase = Phase::AwaitingMove(mark.opponent());
            }
            outcome => {
                info!(?outcome, "Session terminated");
                self.phase = Phase::Terminated(outcome);
            }
        }
    }
}

/// One-shot alarm keyed to the ply it was armed on.
///
/// Both deferred operations in a session (the turn clock and the AI
/// thinking delay) are armed against the current ply and re-armed on
/// every ply transition. An alarm that outlives its ply can still be
/// polled, but [`PlyAlarm::expire`] refuses to fire it, which keeps a
/// stale timer or AI wake-up from acting on a board it no longer
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyAlarm {
    deadline: Instant,
    ply: usize,
    fired: bool,
}

impl PlyAlarm {
    /// Arms an alarm for `ply`, due `after` from `now`.
    pub fn arm(ply: usize, after: Duration, now: Instant) -> Self {
        Self {
            deadline: now + after,
            ply,
            fired: false,
        }
    }

    /// The ply this alarm was armed on.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Time left before the deadline, zero once passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Fires at most once: only past the deadline, and only while the
    /// session is still on the armed ply.
    pub fn expire(&mut self, now: Instant, current_ply: usize) -> bool {
        if self.fired || current_ply != self.ply || now < self.deadline {
            return false;
        }
        self.fired = true;
        true
    }
}
