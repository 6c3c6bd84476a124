//! View model the terminal UI draws from.

use noughts_engine::{Board, Theme};
use tracing::{debug, instrument};

use crate::render::Renderer;

/// A modal message over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Board as it looked when the message was raised, kept so a finished
    /// game stays visible behind its result.
    pub board: Board,
}

/// Everything the terminal shows, updated by the session through [`Renderer`].
#[derive(Debug, Clone, Default)]
pub struct TuiView {
    board: Board,
    status: String,
    theme: Theme,
    popup: Option<Popup>,
}

impl TuiView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Board to draw: the frozen one while a popup is open, the live one otherwise.
    pub fn board(&self) -> &Board {
        self.popup.as_ref().map_or(&self.board, |popup| &popup.board)
    }

    /// Status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Open popup, if any.
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Closes the popup. Returns whether one was open.
    #[instrument(skip(self))]
    pub fn dismiss(&mut self) -> bool {
        self.popup.take().is_some()
    }
}

impl Renderer for TuiView {
    fn render_board(&mut self, board: &Board, status: &str) {
        self.board = board.clone();
        self.status = status.to_string();
    }

    #[instrument(skip(self))]
    fn show_message(&mut self, title: &str, message: &str) {
        debug!("Opening popup");
        self.popup = Some(Popup {
            title: title.to_string(),
            message: message.to_string(),
            board: self.board.clone(),
        });
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
