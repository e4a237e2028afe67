//! Exhaustive minimax search for move selection.

use super::rules::{Outcome, evaluate};
use super::types::{Board, Mark, Square};
use tracing::instrument;

/// Score of a won game from the maximizer's point of view.
const WIN_SCORE: i32 = 10;

/// Score and chosen position returned by [`best_move`].
///
/// `position` is `None` on terminal boards, where there is no move to
/// choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    score: i32,
    position: Option<usize>,
}

impl SearchResult {
    /// The backed-up score from the maximizer's point of view.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The chosen board index, `None` on terminal boards.
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

/// Picks the best move for `maximizer` on `board`.
///
/// Exhaustive recursion with no pruning and no caching; the 3x3 tree
/// is small enough. Terminal scores are +10 for a `maximizer` win,
/// -10 for a `minimizer` win, and 0 for a draw, with no depth
/// adjustment: a win five plies out scores the same as an immediate
/// one. Equal scores keep the earliest position in 0..=8 order,
/// because only a strict improvement updates the choice.
#[instrument(skip(board))]
pub fn best_move(board: &Board, maximizer: Mark, minimizer: Mark) -> SearchResult {
    let mut scratch = board.clone();
    search(&mut scratch, maximizer, minimizer, true)
}

fn search(board: &mut Board, maximizer: Mark, minimizer: Mark, maximizing: bool) -> SearchResult {
    match evaluate(board) {
        Outcome::Win { mark, .. } => {
            let score = if mark == maximizer {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
            return SearchResult {
                score,
                position: None,
            };
        }
        Outcome::Draw => {
            return SearchResult {
                score: 0,
                position: None,
            };
        }
        Outcome::Undecided => {}
    }

    // A full board always evaluates terminal above.
    debug_assert!(!board.is_full(), "full board must be terminal");

    let mover = if maximizing { maximizer } else { minimizer };
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        position: None,
    };

    for index in 0..9 {
        if !board.is_empty(index) {
            continue;
        }
        board.set(index, Square::Occupied(mover)).unwrap();
        let result = search(board, maximizer, minimizer, !maximizing);
        board.set(index, Square::Empty).unwrap();

        let improves = if maximizing {
            result.score > best.score
        } else {
            result.score < best.score
        };
        if improves {
            best = SearchResult {
                score: result.score,
                position: Some(index),
            };
        }
    }

    best
}
