//! Tests for the session host's termination handling.

use noughts::{HistoryStore, Mark, Outcome, RecordedResult, SessionHost};
use tempfile::tempdir;

fn setup_host() -> (tempfile::TempDir, SessionHost) {
    let dir = tempdir().expect("Failed to create temp dir");
    let history = HistoryStore::open(dir.path().join("history.json")).expect("Open failed");
    (dir, SessionHost::new(history))
}

#[test]
fn test_win_updates_tally_and_log() {
    let (_dir, mut host) = setup_host();

    host.on_terminated(Outcome::Win {
        mark: Mark::X,
        line: [0, 1, 2],
    })
    .expect("Record failed");

    assert_eq!(host.scores().wins(Mark::X), 1);
    assert_eq!(host.scores().wins(Mark::O), 0);
    assert_eq!(host.history().entries().len(), 1);
    assert_eq!(
        host.history().entries()[0]
            .parse_result()
            .expect("Parse failed"),
        RecordedResult::Win(Mark::X)
    );
}

#[test]
fn test_draw_records_tie() {
    let (_dir, mut host) = setup_host();

    host.on_terminated(Outcome::Draw).expect("Record failed");

    assert_eq!(*host.scores().ties(), 1);
    assert_eq!(
        host.history().entries()[0]
            .parse_result()
            .expect("Parse failed"),
        RecordedResult::Tie
    );
}

#[test]
fn test_undecided_outcome_is_ignored() {
    let (_dir, mut host) = setup_host();

    host.on_terminated(Outcome::Undecided).expect("Record failed");

    assert_eq!(host.scores().total(), 0);
    assert!(host.history().entries().is_empty());
}

#[test]
fn test_reset_all_clears_tally_and_log() {
    let (_dir, mut host) = setup_host();
    host.on_terminated(Outcome::Win {
        mark: Mark::O,
        line: [2, 4, 6],
    })
    .expect("Record failed");
    host.on_terminated(Outcome::Draw).expect("Record failed");

    host.reset_all().expect("Reset failed");

    assert_eq!(host.scores().total(), 0);
    assert!(host.history().entries().is_empty());
}
