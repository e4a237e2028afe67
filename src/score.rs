//! Cumulative score tally for the current sitting.

use crate::game::Mark;
use derive_getters::Getters;
use tracing::instrument;

/// Win and tie counts across games.
///
/// The session host updates this on each termination event; the
/// session state machine never touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl ScoreBoard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits a win to `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    /// Records a tied game.
    #[instrument(skip(self))]
    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// Games recorded so far.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Wins credited to `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Win percentage for `mark`, rounded to the nearest point.
    /// Zero before any game has finished.
    pub fn win_percent(&self, mark: Mark) -> u32 {
        Self::percent(self.wins(mark), self.total())
    }

    /// Tie percentage, rounded to the nearest point.
    pub fn tie_percent(&self) -> u32 {
        Self::percent(self.ties, self.total())
    }

    fn percent(count: u32, total: u32) -> u32 {
        if total == 0 {
            0
        } else {
            ((count as f64 / total as f64) * 100.0).round() as u32
        }
    }

    /// Clears every tally.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally_has_zero_percentages() {
        let scores = ScoreBoard::new();
        assert_eq!(scores.total(), 0);
        assert_eq!(scores.win_percent(Mark::X), 0);
        assert_eq!(scores.tie_percent(), 0);
    }

    #[test]
    fn test_percentages_round_to_nearest() {
        let mut scores = ScoreBoard::new();
        scores.record_win(Mark::X);
        scores.record_win(Mark::O);
        scores.record_tie();
        // 1/3 rounds to 33.
        assert_eq!(scores.win_percent(Mark::X), 33);
        assert_eq!(scores.win_percent(Mark::O), 33);
        assert_eq!(scores.tie_percent(), 33);

        scores.record_win(Mark::X);
        // 2/4 = 50, 1/4 = 25.
        assert_eq!(scores.win_percent(Mark::X), 50);
        assert_eq!(scores.tie_percent(), 25);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut scores = ScoreBoard::new();
        scores.record_win(Mark::O);
        scores.record_tie();
        scores.reset();
        assert_eq!(scores, ScoreBoard::new());
    }
}
