//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Delete an entry by id.
///
/// Deleting an id that does not exist is a successful no-op; only a
/// failed rewrite of the journal document is an error.
pub fn delete_entry(repository: &FileSystemRepository, id: &str) -> Result<()> {
    let store = repository.entry_store()?;
    store.delete_entry(id).into_result()
}
