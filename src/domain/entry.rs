//! Journal entry model and in-memory document

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Time-of-day kind of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Morning,
    Evening,
}

impl EntryKind {
    /// Human-readable title used in history listings
    pub fn title(&self) -> &'static str {
        match self {
            EntryKind::Morning => "Morning Journal",
            EntryKind::Evening => "Evening Reflection",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Morning => write!(f, "morning"),
            EntryKind::Evening => write!(f, "evening"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(EntryKind::Morning),
            "evening" => Ok(EntryKind::Evening),
            _ => Err(format!(
                "Invalid entry kind: '{}'. Valid kinds: morning, evening",
                s
            )),
        }
    }
}

/// One journal submission for a given day and time-of-day kind.
///
/// `content` maps prompt ids to free-text responses; the keys are not
/// validated against a fixed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub content: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new entry with a `<kind>-<millis>` id and both timestamps
    /// stamped from `now`.
    pub fn new(
        kind: EntryKind,
        date: NaiveDate,
        content: BTreeMap<String, String>,
        now: DateTime<Utc>,
    ) -> Self {
        JournalEntry {
            id: format!("{}-{}", kind, now.timestamp_millis()),
            date,
            kind,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Produce a full-replace revision of this entry.
    ///
    /// Keeps `id`, `kind` and `created_at`, replaces the content map
    /// (not a merge) and restamps `updated_at`.
    pub fn revised(
        &self,
        content: BTreeMap<String, String>,
        date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Self {
        JournalEntry {
            id: self.id.clone(),
            date: date.unwrap_or(self.date),
            kind: self.kind,
            content,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// The single persisted document wrapping the entries collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalDocument {
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

impl JournalDocument {
    /// Insert the entry, or replace an existing entry with the same id
    /// at the same position.
    pub fn upsert(&mut self, entry: JournalEntry) {
        match self.entries.iter().position(|e| e.id == entry.id) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Remove all entries with the given id; returns whether any was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Find an entry by id
    pub fn find(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in display order: newest date first, ties broken by
    /// creation time (newest first).
    pub fn sorted_entries(&self) -> Vec<JournalEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        entries
    }
}
