//! Results and errors of placing a mark.

use serde::{Deserialize, Serialize};

use crate::{Mark, Outcome, Position};

/// What happened after a mark was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The game goes on; the carried mark moves next.
    Continue(Mark),
    /// The carried mark completed a line.
    Win(Mark),
    /// The board filled up without a line.
    Draw,
}

impl MoveResult {
    /// The terminal outcome, or `None` if the game continues.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            MoveResult::Continue(_) => None,
            MoveResult::Win(mark) => Some(Outcome::Win(mark)),
            MoveResult::Draw => Some(Outcome::Draw),
        }
    }

    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }
}

/// A move the engine refused. The game state is untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game was already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A bot move was requested when the bot does not hold the turn.
    #[display("It is not the bot's turn")]
    NotBotTurn,
}

impl std::error::Error for MoveError {}
