//! SQLite-backed preference store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::store::{KeyValueStore, NewPreference, Preference, StoreError, schema};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Preference store backed by a SQLite file.
///
/// Opens a fresh connection per operation, so the value is cheap to clone
/// and holds no open handles between calls.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `db_path` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StoreError> {
        info!("Opening preference store");
        let store = Self { db_path };

        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration failed: {}", e)))?;
        info!(applied = applied.len(), "Migrations applied");

        Ok(store)
    }

    /// Path of the database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Lists every stored preference for `profile`, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list(&self, profile: &str) -> Result<Vec<Preference>, StoreError> {
        let mut conn = self.connection()?;
        let rows = schema::preferences::table
            .filter(schema::preferences::profile.eq(profile))
            .order(schema::preferences::key.asc())
            .select(Preference::as_select())
            .load(&mut conn)?;
        debug!(count = rows.len(), "Preferences listed");
        Ok(rows)
    }

    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }
}

impl KeyValueStore for SqliteStore {
    #[instrument(skip(self))]
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection()?;

        let row = schema::preferences::table
            .filter(schema::preferences::profile.eq(profile))
            .filter(schema::preferences::key.eq(key))
            .select(Preference::as_select())
            .first(&mut conn)
            .optional()?;

        match &row {
            Some(pref) => debug!(value = %pref.value(), updated_at = %pref.updated_at(), "Preference found"),
            None => debug!("Preference not set"),
        }

        Ok(row.map(|pref| pref.value().clone()))
    }

    #[instrument(skip(self))]
    fn put(&mut self, profile: &str, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.connection()?;

        let row = NewPreference::new(profile.to_string(), key.to_string(), value.to_string());
        diesel::replace_into(schema::preferences::table)
            .values(&row)
            .execute(&mut conn)?;

        debug!("Preference stored");
        Ok(())
    }
}
