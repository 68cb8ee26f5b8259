//! Edit entry use case

use crate::domain::JournalEntry;
use crate::error::{DaybookError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

/// Service for editing existing journal entries
pub struct EditEntryService {
    repository: FileSystemRepository,
}

impl EditEntryService {
    /// Create a new edit service
    pub fn new(repository: FileSystemRepository) -> Self {
        EditEntryService { repository }
    }

    /// Replace an entry's content (full replace, not a merge).
    ///
    /// Keeps id, kind and creation time, restamps the update time, and
    /// optionally moves the entry to another logical day.
    pub fn execute(
        &self,
        id: &str,
        responses: BTreeMap<String, String>,
        date: Option<NaiveDate>,
    ) -> Result<JournalEntry> {
        let store = self.repository.entry_store()?;

        let document = store.list_entries();
        let existing = document
            .find(id)
            .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))?;

        let revised = existing.revised(responses, date, Utc::now());
        store.save_entry(&revised).into_result()?;

        Ok(revised)
    }
}
