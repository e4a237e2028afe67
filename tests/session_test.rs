//! Tests for the session state machine.

use noughts::{Mark, MoveError, Outcome, Phase, Session, Square};

/// Plays a sequence of moves on a two-player session, panicking on the
/// first rejection.
fn play(session: &mut Session, moves: &[usize]) {
    for &index in moves {
        session
            .apply_move(index)
            .unwrap_or_else(|e| panic!("move {} rejected: {}", index, e));
    }
}

#[test]
fn test_new_session_initial_state() {
    let session = Session::new(None);
    assert_eq!(session.ply(), 0);
    assert_eq!(session.log().len(), 1);
    assert_eq!(session.phase(), Phase::AwaitingMove(Mark::X));
    assert!(session.board().empties().count() == 9);
    assert!(!session.is_over());
}

#[test]
fn test_apply_move_appends_one_cell_diff() {
    let mut session = Session::new(None);
    session.apply_move(4).unwrap();

    assert_eq!(session.ply(), 1);
    assert_eq!(session.log().len(), 2);
    assert_eq!(session.board().get(4), Some(Square::Occupied(Mark::X)));
    assert_eq!(session.phase(), Phase::AwaitingMove(Mark::O));

    // Exactly one square differs from the previous snapshot.
    let diff = session.log()[0]
        .squares()
        .iter()
        .zip(session.log()[1].squares())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(diff, 1);
}

#[test]
fn test_move_on_occupied_square_changes_nothing() {
    let mut session = Session::new(None);
    session.apply_move(4).unwrap();

    let before = session.clone();
    assert_eq!(session.apply_move(4), Err(MoveError::Occupied(4)));
    assert_eq!(session, before);
}

#[test]
fn test_move_out_of_bounds_changes_nothing() {
    let mut session = Session::new(None);
    let before = session.clone();
    assert_eq!(session.apply_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(session, before);
}

#[test]
fn test_move_rejected_on_machines_turn() {
    let mut session = Session::new(Some(Mark::O));
    session.apply_move(0).unwrap();

    let before = session.clone();
    assert_eq!(session.apply_move(1), Err(MoveError::NotYourTurn(Mark::O)));
    assert_eq!(session, before);
}

#[test]
fn test_win_terminates_on_completing_move() {
    let mut session = Session::new(None);
    play(&mut session, &[0, 3, 1, 4]);
    assert!(!session.is_over());

    // X completes the top row while squares remain empty.
    session.apply_move(2).unwrap();
    assert_eq!(
        session.phase(),
        Phase::Terminated(Outcome::Win {
            mark: Mark::X,
            line: [0, 1, 2]
        })
    );
    assert!(session.board().empties().count() > 0);

    let before = session.clone();
    assert_eq!(session.apply_move(5), Err(MoveError::GameOver));
    assert_eq!(session, before);
}

#[test]
fn test_nine_moves_without_line_draw() {
    let mut session = Session::new(None);
    // Ends with X on {0, 2, 3, 7, 8} and O on {1, 4, 5, 6}: no line
    // for either side, board full.
    play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.phase(), Phase::Terminated(Outcome::Draw));
    assert_eq!(session.ply(), 9);
}

#[test]
fn test_timeout_skips_turn_without_a_mark() {
    let mut session = Session::new(None);

    assert!(session.on_timeout());
    assert_eq!(session.ply(), 1);
    assert_eq!(session.phase(), Phase::AwaitingMove(Mark::O));
    // The skip ply duplicates the snapshot.
    assert_eq!(session.log()[0], session.log()[1]);

    assert!(session.on_timeout());
    assert_eq!(session.ply(), 2);
    assert_eq!(session.phase(), Phase::AwaitingMove(Mark::X));
    assert!(!session.is_over());
}

#[test]
fn test_timeout_is_noop_after_termination() {
    let mut session = Session::new(None);
    play(&mut session, &[0, 3, 1, 4, 2]);
    assert!(session.is_over());

    let before = session.clone();
    assert!(!session.on_timeout());
    assert_eq!(session, before);
}

#[test]
fn test_timeout_then_reset_matches_fresh_session() {
    let mut session = Session::new(None);
    session.on_timeout();
    session.reset();
    assert_eq!(session, Session::new(None));
}

#[test]
fn test_reset_mid_game_restores_initial_state() {
    let mut session = Session::new(Some(Mark::O));
    session.apply_move(0).unwrap();
    session.ai_turn();
    session.reset();
    assert_eq!(session, Session::new(Some(Mark::O)));
}

#[test]
fn test_ai_answers_corner_with_center() {
    let mut session = Session::new(Some(Mark::O));
    session.apply_move(0).unwrap();

    // Every reply to a corner opening except the center loses.
    assert_eq!(session.ai_turn(), Some(4));
    assert_eq!(session.board().get(4), Some(Square::Occupied(Mark::O)));
    assert_eq!(session.phase(), Phase::AwaitingMove(Mark::X));
}

#[test]
fn test_ai_turn_is_noop_on_players_turn() {
    let mut session = Session::new(Some(Mark::O));
    let before = session.clone();
    assert_eq!(session.ai_turn(), None);
    assert_eq!(session, before);
}

#[test]
fn test_ai_turn_is_noop_after_termination() {
    // March X to a win past a machine opponent by skipping O's turns.
    let mut session = Session::new(Some(Mark::O));
    session.apply_move(0).unwrap();
    assert!(session.on_timeout());
    session.apply_move(1).unwrap();
    assert!(session.on_timeout());
    session.apply_move(2).unwrap();
    assert!(session.is_over());

    let before = session.clone();
    assert_eq!(session.ai_turn(), None);
    assert_eq!(session, before);
}

#[test]
fn test_ai_turn_is_noop_without_ai_mark() {
    let mut session = Session::new(None);
    session.apply_move(0).unwrap();
    let before = session.clone();
    assert_eq!(session.ai_turn(), None);
    assert_eq!(session, before);
}

#[test]
fn test_full_machine_game_ends_in_draw() {
    // Hand every turn to the search: perfect play on both sides draws.
    let mut session = Session::new(Some(Mark::X));
    for _ in 0..9 {
        if session.is_over() {
            break;
        }
        let active = session.active_mark().expect("session is running");
        if session.ai_mark() == Some(active) {
            session.ai_turn();
        } else {
            let chosen = noughts::best_move(session.board(), active, active.opponent());
            session
                .apply_move(chosen.position().expect("running game has a move"))
                .unwrap();
        }
    }
    assert_eq!(session.phase(), Phase::Terminated(Outcome::Draw));
}
