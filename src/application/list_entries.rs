//! List and look up entries use case

use crate::domain::{EntryKind, JournalEntry};
use crate::error::{DaybookError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// List entries in display order (newest date first, then newest created),
/// with optional kind filter, date filter and limit.
pub fn list_entries(
    repository: &FileSystemRepository,
    kind: Option<EntryKind>,
    date: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<JournalEntry>> {
    let store = repository.entry_store()?;
    let mut entries = store.list_entries().sorted_entries();

    if let Some(kind) = kind {
        entries.retain(|e| e.kind == kind);
    }
    if let Some(date) = date {
        entries.retain(|e| e.date == date);
    }
    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}

/// Look up a single entry by id
pub fn find_entry(repository: &FileSystemRepository, id: &str) -> Result<JournalEntry> {
    let store = repository.entry_store()?;
    store
        .list_entries()
        .find(id)
        .cloned()
        .ok_or_else(|| DaybookError::EntryNotFound(id.to_string()))
}
