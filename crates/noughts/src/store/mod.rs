//! Persistence for preferences: the outcome tally and the theme.

mod error;
mod memory;
mod models;
mod preferences;
mod schema; // Diesel generated schema - internal use only
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::{NewPreference, Preference};
pub use preferences::{DEFAULT_PROFILE, Preferences};
pub use sqlite::{MIGRATIONS, SqliteStore};

/// String key-value storage partitioned by profile name.
pub trait KeyValueStore {
    /// Reads a value. Returns `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn put(&mut self, profile: &str, key: &str, value: &str) -> Result<(), StoreError>;
}
