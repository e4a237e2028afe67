//! Outcome evaluation over board snapshots.

use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in canonical order: rows, then columns, then
/// diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    Undecided,
    /// `mark` holds all three squares of `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line, as board indices.
        line: [usize; 3],
    },
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Evaluates a board snapshot.
///
/// Total over all 3^9 configurations; boards that could not arise from
/// legal play are not rejected here; that is the session's job. Lines
/// are checked in [`WIN_LINES`] order and the first complete line is
/// the one reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(Square::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(mark))
            && board.get(c) == Some(Square::Occupied(mark))
        {
            return Outcome::Win { mark, line };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, indices: &[usize], mark: Mark) {
        for &i in indices {
            board.set(i, Square::Occupied(mark)).unwrap();
        }
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let mut board = Board::new();
            occupy(&mut board, &line, Mark::O);
            assert_eq!(
                evaluate(&board),
                Outcome::Win {
                    mark: Mark::O,
                    line
                }
            );
        }
    }

    #[test]
    fn test_first_line_reported_on_double_win() {
        // Row 0 and column 0 both complete; rows are checked first.
        let mut board = Board::new();
        occupy(&mut board, &[0, 1, 2, 3, 6], Mark::X);
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_incomplete_line_undecided() {
        let mut board = Board::new();
        occupy(&mut board, &[0, 1], Mark::X);
        occupy(&mut board, &[4], Mark::O);
        assert_eq!(evaluate(&board), Outcome::Undecided);
    }

    #[test]
    fn test_full_board_without_line_draws() {
        let mut board = Board::new();
        occupy(&mut board, &[0, 2, 3, 7, 8], Mark::X);
        occupy(&mut board, &[1, 4, 5, 6], Mark::O);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        // All X: several lines complete on a full board, never Draw.
        let mut board = Board::new();
        occupy(&mut board, &(0..9).collect::<Vec<_>>(), Mark::X);
        assert_eq!(evaluate(&board).winner(), Some(Mark::X));
    }
}
