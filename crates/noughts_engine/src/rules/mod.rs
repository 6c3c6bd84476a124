//! Game rules as pure functions over a [`Board`](crate::Board).
//!
//! Kept apart from board storage so the engine, the bot and tests can all
//! evaluate positions without mutating anything.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
