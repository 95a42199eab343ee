//! File-backed entry store
//!
//! Keeps one Markdown file per entry in a flat directory: the entry titled
//! "Python" lives at `<entries_dir>/Python.md`. The directory listing is the
//! source of truth for which entries exist.

use super::{is_valid_title, EntryStore, Result, StoreError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct FileStore {
    entries_dir: PathBuf,
}

impl FileStore {
    /// Create a store over an existing directory without touching the disk.
    pub fn new<P: AsRef<Path>>(entries_dir: P) -> Self {
        Self {
            entries_dir: entries_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a store, creating the entries directory if it does not exist.
    pub fn open<P: AsRef<Path>>(entries_dir: P) -> Result<Self> {
        let store = Self::new(entries_dir);
        if !store.entries_dir.exists() {
            fs::create_dir_all(&store.entries_dir)?;
        }
        Ok(store)
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        self.entries_dir.join(format!("{title}.md"))
    }
}

impl EntryStore for FileStore {
    fn list_entries(&self) -> Result<Vec<String>> {
        if !self.entries_dir.exists() {
            return Ok(Vec::new());
        }

        let mut titles = Vec::new();
        for dir_entry in fs::read_dir(&self.entries_dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                titles.push(stem.to_string());
            }
        }
        titles.sort();
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        if !is_valid_title(title) {
            return Ok(None);
        }
        match fs::read_to_string(self.entry_path(title)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<()> {
        if !is_valid_title(title) {
            return Err(StoreError::InvalidTitle(title.to_string()));
        }
        fs::write(self.entry_path(title), content)?;
        Ok(())
    }
}
