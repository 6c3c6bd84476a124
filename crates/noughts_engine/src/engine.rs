//! Game engine: applies moves, plays the bot, tracks outcomes.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::bot::pick_random_move;
use crate::rules::{check_winner, is_draw};
use crate::{
    GameMode, GameState, GameStatus, Mark, MoveError, MoveResult, Outcome, OutcomeTally, Position,
};

/// Owns the current game and the running tally.
///
/// Every operation is synchronous and leaves the state unchanged when it
/// returns an error.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    tally: OutcomeTally,
}

impl Engine {
    /// Starts a fresh game in `mode`, continuing from a previously loaded tally.
    #[instrument]
    pub fn new(mode: GameMode, tally: OutcomeTally) -> Self {
        Self {
            state: GameState::new(mode),
            tally,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Running tally.
    pub fn tally(&self) -> &OutcomeTally {
        &self.tally
    }

    /// True when the bot should move next.
    pub fn bot_to_move(&self) -> bool {
        !self.state.is_terminal() && self.state.mode().bot_mark() == Some(self.state.current_turn())
    }

    /// Places the current turn's mark at `(row, col)`.
    ///
    /// Evaluates, in order: a completed line, a full board, otherwise passes
    /// the turn. When this returns `Continue` and [`Engine::bot_to_move`] is
    /// true, the caller should follow up with [`Engine::make_bot_move`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::OutOfRange`] if `row` or `col` is not in `0..3`.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(turn = %self.state.current_turn()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.state.current_turn();
        Ok(self.place(pos, mark))
    }

    /// True if any row, column or diagonal holds three identical marks.
    #[instrument(skip(self))]
    pub fn check_for_win(&self) -> bool {
        check_winner(self.state.board()).is_some()
    }

    /// Plays O on a uniformly random empty cell.
    ///
    /// The turn goes back to X unless the move ends the game, so the bot
    /// never moves twice in a row.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::NotBotTurn`] outside bot mode or when X is to move.
    #[instrument(skip(self, rng))]
    pub fn make_bot_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveResult, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.bot_to_move() {
            return Err(MoveError::NotBotTurn);
        }

        // A game in progress always has an empty cell.
        let pos = pick_random_move(self.state.board(), rng).ok_or(MoveError::GameOver)?;
        Ok(self.place(pos, Mark::O))
    }

    /// Clears the board for a new game. The mode and tally are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> &GameState {
        debug!(mode = ?self.state.mode(), "Resetting game");
        self.state = GameState::new(self.state.mode());
        &self.state
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> &GameState {
        info!(?mode, "Switching game mode");
        self.state.set_mode(mode);
        self.reset_game()
    }

    /// Adds a finished game to the tally and returns the updated tally.
    #[instrument(skip(self))]
    pub fn record_outcome(&mut self, outcome: Outcome) -> OutcomeTally {
        self.tally.record(outcome);
        info!(
            wins = self.tally.wins(),
            losses = self.tally.losses(),
            draws = self.tally.draws(),
            "Tally updated"
        );
        self.tally
    }

    fn place(&mut self, pos: Position, mark: Mark) -> MoveResult {
        self.state.place(pos, mark);
        debug_assert!(self.state.is_consistent(), "Game state invariant violated");

        let result = if let Some(winner) = check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
            MoveResult::Win(winner)
        } else if is_draw(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            MoveResult::Draw
        } else {
            let next = mark.opponent();
            self.state.set_turn(next);
            MoveResult::Continue(next)
        };

        debug!(position = %pos, %mark, move_count = self.state.move_count(), ?result, "Mark placed");
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(GameMode::default(), OutcomeTally::default())
    }
}
