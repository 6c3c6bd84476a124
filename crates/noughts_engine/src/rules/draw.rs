//! Draw detection.

use tracing::instrument;

use super::win::check_winner;
use crate::{Board, Cell};

/// True when every cell holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// True when the board is full and nobody completed a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(rows.concat().chars()) {
            match ch {
                'X' => board.set(*pos, Cell::Occupied(Mark::X)),
                'O' => board.set(*pos, Cell::Occupied(Mark::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from(["XOX", "OXO", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
