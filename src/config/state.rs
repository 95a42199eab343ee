// Application state module
// Immutable state shared by every connection task.

use std::sync::Arc;

use super::types::Config;
use crate::store::EntryStore;

/// Application state: configuration plus the injected entry store.
///
/// The store is held as a trait object so handlers run identically over the
/// file-backed store in production and the in-memory store in tests.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn EntryStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn EntryStore>) -> Self {
        Self { config, store }
    }
}
