//! Keyboard mapping.

use crossterm::event::KeyCode;
use noughts_engine::{BOARD_SIZE, Position};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell.
    PlaceAt(Position),
    /// Switch between two players and bot mode.
    ToggleMode,
    /// Switch between light and dark.
    ToggleTheme,
    /// Open the statistics dialog.
    ShowStats,
    /// Close the open dialog.
    Dismiss,
    /// Leave the game.
    Quit,
}

/// Maps a key to a command. Digits 1-9 address cells row-major.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Command::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::PlaceAt),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::ToggleMode),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ToggleTheme),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::ShowStats),
        KeyCode::Esc => Some(Command::Dismiss),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let last = BOARD_SIZE - 1;
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
