//! In-memory preference store.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::store::{KeyValueStore, StoreError};

/// Keeps preferences in a map for the lifetime of the value.
///
/// Used by tests and by throwaway sessions that should not touch disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<(String, String), String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values across all profiles.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    #[instrument(skip(self))]
    fn get(&self, profile: &str, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .values
            .get(&(profile.to_string(), key.to_string()))
            .cloned();
        debug!(found = value.is_some(), "Memory lookup");
        Ok(value)
    }

    #[instrument(skip(self))]
    fn put(&mut self, profile: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .insert((profile.to_string(), key.to_string()), value.to_string());
        Ok(())
    }
}
