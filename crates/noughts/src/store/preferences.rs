//! Typed access to the persisted tally and theme.

use std::str::FromStr;

use noughts_engine::{OutcomeTally, Theme};
use tracing::{debug, info, instrument};

use crate::store::{KeyValueStore, StoreError};

/// Profile name used when none is configured.
pub const DEFAULT_PROFILE: &str = "TicTacToePrefs";

const KEY_WINS: &str = "wins";
const KEY_LOSSES: &str = "losses";
const KEY_DRAWS: &str = "draws";
const KEY_DARK_THEME: &str = "isDarkTheme";

/// Typed load/save over a [`KeyValueStore`], scoped to one profile.
///
/// Absent values load as zero counters and [`Theme::Light`].
#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
    profile: String,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Wraps `store`, reading and writing under `profile`.
    #[instrument(skip(store))]
    pub fn new(store: S, profile: String) -> Self {
        Self {
            store,
            profile,
        }
    }

    /// Profile name.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the tally.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails or a counter is not a number.
    #[instrument(skip(self), fields(profile = %self.profile))]
    pub fn load_tally(&self) -> Result<OutcomeTally, StoreError> {
        let tally = OutcomeTally::new(
            self.read(KEY_WINS, 0)?,
            self.read(KEY_LOSSES, 0)?,
            self.read(KEY_DRAWS, 0)?,
        );
        info!(?tally, "Tally loaded");
        Ok(tally)
    }

    /// Saves all three counters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    #[instrument(skip(self), fields(profile = %self.profile))]
    pub fn save_tally(&mut self, tally: &OutcomeTally) -> Result<(), StoreError> {
        self.write(KEY_WINS, tally.wins())?;
        self.write(KEY_LOSSES, tally.losses())?;
        self.write(KEY_DRAWS, tally.draws())?;
        info!("Tally saved");
        Ok(())
    }

    /// Loads the theme.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails or the flag is not a boolean.
    #[instrument(skip(self), fields(profile = %self.profile))]
    pub fn load_theme(&self) -> Result<Theme, StoreError> {
        let theme = Theme::from_dark_flag(self.read(KEY_DARK_THEME, false)?);
        debug!(%theme, "Theme loaded");
        Ok(theme)
    }

    /// Saves the theme.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    #[instrument(skip(self), fields(profile = %self.profile))]
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.write(KEY_DARK_THEME, theme.is_dark())
    }

    fn read<T>(&self, key: &str, default: T) -> Result<T, StoreError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.store.get(&self.profile, key)? {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|e| {
                StoreError::new(format!(
                    "Invalid value '{}' for '{}' in profile '{}': {}",
                    raw, key, self.profile, e
                ))
            }),
        }
    }

    fn write(&mut self, key: &str, value: impl ToString) -> Result<(), StoreError> {
        self.store.put(&self.profile, key, &value.to_string())
    }
}
