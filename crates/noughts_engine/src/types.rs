//! Core domain types for the board game.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::Position;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second. The bot always plays O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

/// 3×3 board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Overwrites the cell at `pos`.
    ///
    /// No rules are checked here; the engine validates moves before calling this.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// True if nobody has played at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether O is a second human or the random bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    HumanVsHuman,
    /// The human plays X, the bot answers as O.
    HumanVsBot,
}

impl GameMode {
    /// Mark played by the bot in this mode, if any.
    pub fn bot_mark(self) -> Option<Mark> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsBot => Some(Mark::O),
        }
    }

    /// Flips between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsBot,
            GameMode::HumanVsBot => GameMode::HumanVsHuman,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Two players",
            GameMode::HumanVsBot => "Versus bot",
        }
    }
}

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up without a line.
    Draw,
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Mark,
    move_count: u8,
    mode: GameMode,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty board, X to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            move_count: 0,
            mode,
            status: GameStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next. After a terminal move this is the mark that ended the game.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Checks the board invariants: X is level with O or one ahead, and
    /// `move_count` matches the number of occupied cells.
    #[instrument(skip(self))]
    pub fn is_consistent(&self) -> bool {
        let x = self.board.count(Mark::X);
        let o = self.board.count(Mark::O);
        let balanced = x == o || x == o + 1;
        let counted = usize::from(self.move_count) == self.board.occupied();
        if !balanced || !counted {
            warn!(x, o, move_count = self.move_count, "Game state invariant violated");
        }
        balanced && counted
    }

    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.board.set(pos, Cell::Occupied(mark));
        self.move_count += 1;
    }

    pub(crate) fn set_turn(&mut self, mark: Mark) {
        self.current_turn = mark;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_initial() {
        let state = GameState::new(GameMode::HumanVsBot);
        assert_eq!(state.current_turn(), Mark::X);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.mode(), GameMode::HumanVsBot);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
    }

    #[test]
    fn test_consistency_detects_extra_o() {
        let mut state = GameState::new(GameMode::HumanVsHuman);
        state.place(Position::Center, Mark::O);
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_consistency_detects_untracked_cell() {
        let mut state = GameState::new(GameMode::HumanVsHuman);
        state.place(Position::Center, Mark::X);
        state.board.set(Position::TopLeft, Cell::Occupied(Mark::O));
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_mode_toggle_and_bot_mark() {
        assert_eq!(GameMode::HumanVsHuman.toggle(), GameMode::HumanVsBot);
        assert_eq!(GameMode::HumanVsBot.bot_mark(), Some(Mark::O));
        assert_eq!(GameMode::HumanVsHuman.bot_mark(), None);
    }
}
