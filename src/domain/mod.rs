//! Domain layer - Business logic and domain models

pub mod entry;
pub mod prompts;

pub use entry::{EntryKind, JournalDocument, JournalEntry};
pub use prompts::{label_for, prompts_for, Prompt};
