//! File-backed JSON entry store

use crate::domain::{JournalDocument, JournalEntry};
use crate::error::{DaybookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a store mutation.
///
/// Mutations report failures instead of raising them, so callers always
/// get a value back and decide for themselves how to surface a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub success: bool,
    pub error: Option<String>,
}

impl StoreStatus {
    fn ok() -> Self {
        StoreStatus {
            success: true,
            error: None,
        }
    }

    fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => StoreStatus::ok(),
            Err(e) => StoreStatus {
                success: false,
                error: Some(e.to_string()),
            },
        }
    }

    /// Convert into a `Result` for callers that treat a failed write
    /// as an error.
    pub fn into_result(self) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(DaybookError::Store(
                self.error.unwrap_or_else(|| "unknown store error".to_string()),
            ))
        }
    }
}

/// Durable store for the journal document, backed by a single JSON file.
///
/// The path is supplied at construction so tests can point each store at
/// its own location. Reads fail open (a missing or corrupt file reads as
/// an empty document); writes report failures through [`StoreStatus`].
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store over the given document path
    pub fn new(path: PathBuf) -> Self {
        EntryStore { path }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty document if the backing file does not exist yet.
    ///
    /// Called once at journal initialization; the read and mutation
    /// operations assume the file is present.
    pub fn initialize(&self) -> Result<()> {
        if !self.path.exists() {
            self.persist(&JournalDocument::default())?;
        }
        Ok(())
    }

    /// Read the whole document.
    ///
    /// Never fails: a missing, unreadable or malformed file yields the
    /// empty document so the caller always has something to render.
    pub fn list_entries(&self) -> JournalDocument {
        self.load().unwrap_or_default()
    }

    /// Upsert an entry: replace an existing entry with the same id at the
    /// same position, or append a new one, then rewrite the document.
    pub fn save_entry(&self, entry: &JournalEntry) -> StoreStatus {
        StoreStatus::from_result(self.apply_save(entry))
    }

    /// Delete the entry with the given id and rewrite the document.
    /// Deleting an id that is not present still succeeds.
    pub fn delete_entry(&self, id: &str) -> StoreStatus {
        StoreStatus::from_result(self.apply_delete(id))
    }

    fn apply_save(&self, entry: &JournalEntry) -> Result<()> {
        let mut document = self.load()?;
        document.upsert(entry.clone());
        self.persist(&document)
    }

    fn apply_delete(&self, id: &str) -> Result<()> {
        let mut document = self.load()?;
        document.remove(id);
        self.persist(&document)
    }

    fn load(&self) -> Result<JournalDocument> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the document atomically: serialize to a temp file in the same
    /// directory, then rename into place, so a crash mid-write cannot leave
    /// a half-written document behind.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove
    /// the destination first.
    fn persist(&self, document: &JournalDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(document)?;

        let tmp_name = format!(
            "{}.daybook-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("journal-data.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
