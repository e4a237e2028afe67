//! Cursor movement on the 3x3 grid.

use crossterm::event::KeyCode;

/// Moves the cursor index (0-8, row-major) for an arrow key, clamped
/// to the board.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    row * 3 + col
}
