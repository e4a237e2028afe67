//! Session host: wires termination events to scores and the result log.

use crate::game::Outcome;
use crate::history::{HistoryError, HistoryStore, RecordedResult};
use crate::score::ScoreBoard;
use derive_getters::Getters;
use tracing::{info, instrument, warn};

/// Consumer of session termination events.
///
/// The session state machine knows nothing about scores or
/// persistence; the driver hands each terminal outcome here exactly
/// once.
#[derive(Debug, Getters)]
pub struct SessionHost {
    scores: ScoreBoard,
    history: HistoryStore,
}

impl SessionHost {
    /// Creates a host around an opened result log.
    pub fn new(history: HistoryStore) -> Self {
        Self {
            scores: ScoreBoard::new(),
            history,
        }
    }

    /// Records a finished game.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if persisting the result log failed;
    /// the in-memory tally is updated regardless.
    #[instrument(skip(self))]
    pub fn on_terminated(&mut self, outcome: Outcome) -> Result<(), HistoryError> {
        match outcome {
            Outcome::Win { mark, .. } => {
                info!(winner = %mark, "Recording win");
                self.scores.record_win(mark);
                self.history.append(RecordedResult::Win(mark))
            }
            Outcome::Draw => {
                info!("Recording tie");
                self.scores.record_tie();
                self.history.append(RecordedResult::Tie)
            }
            Outcome::Undecided => {
                warn!("Termination event for an undecided outcome");
                Ok(())
            }
        }
    }

    /// Clears the tally and the persisted log.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if the log file cannot be removed.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) -> Result<(), HistoryError> {
        self.scores.reset();
        self.history.clear()
    }
}
