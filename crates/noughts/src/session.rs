//! A playing session: engine, persisted preferences and a view wired together.

use noughts_engine::{Engine, GameMode, GameState, MoveResult, Outcome, OutcomeTally, Theme};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::render::{GAME_OVER_TITLE, Renderer, STATS_TITLE, stats_message, status_message};
use crate::store::{KeyValueStore, Preferences, StoreError};

/// Drives one interactive session.
///
/// Each human click runs to completion before returning: the move, the bot's
/// reply when it holds the turn, and on a finished game the tally update
/// and save, the result message and the reset.
#[derive(Debug)]
pub struct GameSession<S, R, G> {
    engine: Engine,
    preferences: Preferences<S>,
    renderer: R,
    rng: G,
    theme: Theme,
}

impl<S, R, G> GameSession<S, R, G>
where
    S: KeyValueStore,
    R: Renderer,
    G: Rng,
{
    /// Loads the tally and theme, skins the view and shows an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the preferences cannot be read.
    #[instrument(skip(preferences, renderer, rng), fields(profile = %preferences.profile()))]
    pub fn start(
        preferences: Preferences<S>,
        mut renderer: R,
        rng: G,
        mode: GameMode,
    ) -> Result<Self, StoreError> {
        let tally = preferences.load_tally()?;
        let theme = preferences.load_theme()?;
        renderer.apply_theme(theme);

        let mut session = Self {
            engine: Engine::new(mode, tally),
            preferences,
            renderer,
            rng,
            theme,
        };
        session.render_current();
        info!(?mode, %theme, "Session started");
        Ok(session)
    }

    /// Handles a click on `(row, col)`.
    ///
    /// Invalid clicks (off the board, on an occupied cell) are ignored.
    /// Returns the outcome when this click finished a game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated tally cannot be saved. The result
    /// is still shown and the game reset.
    #[instrument(skip(self))]
    pub fn click(&mut self, row: usize, col: usize) -> Result<Option<Outcome>, StoreError> {
        let result = match self.engine.apply_move(row, col) {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "Ignoring invalid move");
                return Ok(None);
            }
        };

        if result.is_terminal() || !self.engine.bot_to_move() {
            return self.advance(result);
        }

        match self.engine.make_bot_move(&mut self.rng) {
            Ok(reply) => self.advance(reply),
            Err(e) => {
                warn!(error = %e, "Bot could not move");
                self.render_current();
                Ok(None)
            }
        }
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.engine.set_mode(mode);
        self.render_current();
    }

    /// Flips between two-player and bot mode, starting a new game.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.engine.state().mode().toggle();
        self.set_mode(mode);
        mode
    }

    /// Flips the theme, re-skins the view and saves the choice.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the theme cannot be saved.
    #[instrument(skip(self), fields(from = %self.theme))]
    pub fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        self.theme = self.theme.toggle();
        self.renderer.apply_theme(self.theme);
        self.preferences.save_theme(self.theme)?;
        info!(theme = %self.theme, "Theme changed");
        Ok(self.theme)
    }

    /// Shows the statistics dialog.
    #[instrument(skip(self))]
    pub fn show_stats(&mut self) {
        let message = stats_message(self.engine.tally());
        self.renderer.show_message(STATS_TITLE, &message);
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.engine.state().mode()
    }

    /// Running tally.
    pub fn tally(&self) -> &OutcomeTally {
        self.engine.tally()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The view.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The view, mutably (for view-local state such as dismissing a dialog).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The persisted preferences.
    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    fn advance(&mut self, result: MoveResult) -> Result<Option<Outcome>, StoreError> {
        match result.outcome() {
            None => {
                self.render_current();
                Ok(None)
            }
            Some(outcome) => {
                self.finish(outcome)?;
                Ok(Some(outcome))
            }
        }
    }

    #[instrument(skip(self))]
    fn finish(&mut self, outcome: Outcome) -> Result<(), StoreError> {
        let tally = self.engine.record_outcome(outcome);
        let saved = self.preferences.save_tally(&tally);
        if let Err(e) = &saved {
            warn!(error = %e, "Failed to save tally");
        }

        let message = outcome.to_string();
        self.renderer.render_board(self.engine.state().board(), &message);
        self.renderer.show_message(GAME_OVER_TITLE, &message);

        self.engine.reset_game();
        self.render_current();
        saved
    }

    fn render_current(&mut self) {
        let status = status_message(self.engine.state());
        self.renderer.render_board(self.engine.state().board(), &status);
    }
}
