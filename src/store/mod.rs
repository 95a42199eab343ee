//! Entry storage module
//!
//! Abstracts persistence of wiki entries behind the `EntryStore` trait so the
//! request handlers never touch the filesystem directly. Production uses the
//! file-backed store; tests use the in-memory store.

pub mod fs;
pub mod memory;

pub use fs::FileStore;
pub use memory::InMemoryStore;

use thiserror::Error;

/// Errors surfaced by entry stores.
///
/// A missing entry is not an error: lookups return `Ok(None)` so callers must
/// handle absence explicitly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid entry title: {0:?}")]
    InvalidTitle(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstract interface for entry storage.
///
/// Titles are exact keys: `get_entry("python")` does not find an entry saved
/// as "Python". Case-insensitive lookups are a caller concern, built on
/// `list_entries`.
pub trait EntryStore: Send + Sync {
    /// List the titles of all stored entries, sorted ascending.
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Fetch an entry's raw Markdown content, or `None` if no entry has
    /// exactly this title.
    fn get_entry(&self, title: &str) -> Result<Option<String>>;

    /// Save an entry, creating it or overwriting the previous content.
    fn save_entry(&self, title: &str, content: &str) -> Result<()>;
}

/// A title must stay a single path component so the file store cannot be
/// steered outside its entries directory.
fn is_valid_title(title: &str) -> bool {
    !title.is_empty()
        && title != "."
        && title != ".."
        && !title.contains('/')
        && !title.contains('\\')
        && !title.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_titles() {
        assert!(is_valid_title("Python"));
        assert!(is_valid_title("Category Theory"));
        assert!(is_valid_title("C++"));
        assert!(is_valid_title("..well"));
    }

    #[test]
    fn test_invalid_titles() {
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("."));
        assert!(!is_valid_title(".."));
        assert!(!is_valid_title("a/b"));
        assert!(!is_valid_title("..\\secrets"));
        assert!(!is_valid_title("nul\0byte"));
    }
}
