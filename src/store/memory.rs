//! In-memory entry store for tests.
//! Does NOT persist data.

use super::{is_valid_title, EntryStore, Result, StoreError};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// Map-backed store. The `BTreeMap` keeps titles in the same sorted order the
/// file store produces, so tests observe identical listing behavior.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pre-populated store. Seeding goes through `save_entry`, so
    /// fixtures obey the same title rules as production writes.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (title, content) in entries {
            store
                .save_entry(title, content)
                .unwrap_or_else(|e| panic!("seed entry {title:?}: {e}"));
        }
        store
    }
}

impl EntryStore for InMemoryStore {
    fn list_entries(&self) -> Result<Vec<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.keys().cloned().collect())
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(title).cloned())
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<()> {
        if !is_valid_title(title) {
            return Err(StoreError::InvalidTitle(title.to_string()));
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(title.to_string(), content.to_string());
        Ok(())
    }
}
