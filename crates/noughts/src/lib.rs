//! Noughts - terminal tic-tac-toe with a random bot.
//!
//! Wires the [`noughts_engine`] game logic to persisted preferences and a
//! terminal view.
//!
//! # Architecture
//!
//! - **Store**: key-value preferences (tally and theme) in SQLite or memory
//! - **Session**: runs moves, bot replies, outcome recording and resets
//! - **Render**: the view boundary the session drives
//! - **TUI**: the `ratatui` implementation of that view
//!
//! # Example
//!
//! ```
//! use noughts::{GameSession, MemoryStore, Preferences, Renderer};
//! use noughts_engine::{Board, GameMode, Theme};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! struct Silent;
//!
//! impl Renderer for Silent {
//!     fn render_board(&mut self, _board: &Board, _status: &str) {}
//!     fn show_message(&mut self, _title: &str, _message: &str) {}
//!     fn apply_theme(&mut self, _theme: Theme) {}
//! }
//!
//! # fn main() -> Result<(), noughts::StoreError> {
//! let prefs = Preferences::new(MemoryStore::new(), "demo".to_string());
//! let mut session = GameSession::start(prefs, Silent, StdRng::seed_from_u64(1), GameMode::HumanVsBot)?;
//! session.click(1, 1)?;
//! assert_eq!(session.state().move_count(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod session;
mod store;
pub mod tui;

pub use config::{AppConfig, ConfigError, ENV_DB_PATH, ENV_LOG_FILE, ENV_PROFILE};
pub use render::{
    GAME_OVER_TITLE, Renderer, STATS_TITLE, stats_message, status_message, turn_message,
};
pub use session::GameSession;
pub use tui::TuiView;
pub use store::{
    DEFAULT_PROFILE, KeyValueStore, MIGRATIONS, MemoryStore, NewPreference, Preference,
    Preferences, SqliteStore, StoreError,
};
