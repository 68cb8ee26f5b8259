//! Create entry use case

use crate::domain::{EntryKind, JournalEntry};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

/// Service for creating journal entries
pub struct NewEntryService {
    repository: FileSystemRepository,
}

impl NewEntryService {
    /// Create a new entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        NewEntryService { repository }
    }

    /// Compose and persist a new entry.
    ///
    /// The id and both timestamps are assigned here; the store itself
    /// never stamps anything. A failed write surfaces as an error.
    pub fn execute(
        &self,
        kind: EntryKind,
        date: NaiveDate,
        responses: BTreeMap<String, String>,
    ) -> Result<JournalEntry> {
        let entry = JournalEntry::new(kind, date, responses, Utc::now());

        let store = self.repository.entry_store()?;
        store.save_entry(&entry).into_result()?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init;
    use tempfile::TempDir;

    #[test]
    fn test_execute_persists_entry() {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let mut responses = BTreeMap::new();
        responses.insert("gratitude".to_string(), "coffee".to_string());

        let service = NewEntryService::new(repo.clone());
        let entry = service
            .execute(EntryKind::Morning, "2024-11-01".parse().unwrap(), responses)
            .unwrap();

        assert!(entry.id.starts_with("morning-"));
        assert_eq!(entry.created_at, entry.updated_at);

        let doc = repo.entry_store().unwrap().list_entries();
        assert_eq!(doc.find(&entry.id), Some(&entry));
    }

    #[test]
    fn test_execute_outside_journal_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let service = NewEntryService::new(repo);
        let result = service.execute(
            EntryKind::Evening,
            "2024-11-01".parse().unwrap(),
            BTreeMap::new(),
        );
        assert!(result.is_err());
    }
}
