//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod edit_entry;
pub mod init;
pub mod list_entries;
pub mod new_entry;

pub use delete_entry::delete_entry;
pub use edit_entry::EditEntryService;
pub use list_entries::{find_entry, list_entries};
pub use new_entry::NewEntryService;
