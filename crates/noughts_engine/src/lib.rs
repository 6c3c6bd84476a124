//! Noughts engine - pure tic-tac-toe game logic.
//!
//! The engine owns the board, the turn order, win and draw detection, the
//! random bot and the running win/loss/draw tally. It performs no I/O:
//! rendering and persistence belong to the caller.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Engine, GameMode, Mark, MoveResult, OutcomeTally};
//!
//! let mut engine = Engine::new(GameMode::HumanVsHuman, OutcomeTally::default());
//! assert_eq!(engine.apply_move(1, 1), Ok(MoveResult::Continue(Mark::O)));
//! assert!(!engine.check_for_win());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod bot;
mod engine;
mod position;
pub mod rules;
mod tally;
mod theme;
mod types;

pub use action::{MoveError, MoveResult};
pub use bot::pick_random_move;
pub use engine::Engine;
pub use position::{BOARD_SIZE, Position};
pub use tally::{Outcome, OutcomeTally};
pub use theme::Theme;
pub use types::{Board, Cell, GameMode, GameState, GameStatus, Mark};
