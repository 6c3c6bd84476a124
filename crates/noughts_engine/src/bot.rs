//! The random opponent.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::{Board, Position};

/// Picks a position uniformly at random among the empty cells.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn pick_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let empty = Position::empty_on(board);
    let choice = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?choice, "Bot picked a cell");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Mark::X));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomCenter {
                board.set(pos, Cell::Occupied(Mark::O));
            }
        }
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(
                pick_random_move(&board, &mut rng),
                Some(Position::BottomCenter)
            );
        }
    }

    #[test]
    fn test_never_picks_occupied_and_reaches_every_empty_cell() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::X));
        board.set(Position::TopLeft, Cell::Occupied(Mark::O));
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = HashSet::new();
        for _ in 0..500 {
            let pos = pick_random_move(&board, &mut rng).expect("board has empty cells");
            assert!(board.is_empty(pos));
            seen.insert(pos);
        }
        assert_eq!(seen.len(), 7);
    }
}
