//! Output formatting utilities

use crate::domain::{label_for, prompts_for, JournalEntry};
use chrono::NaiveDate;

/// Greeting for an hour of the day (0-23)
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Long display form of a date, e.g. "Friday, November 1, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Format the history listing: one row per entry, newest first
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No journal entries yet. Start with 'daybook new morning'.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:<30}  {:<18}  {}\n",
            format_long_date(entry.date),
            entry.kind.title(),
            entry.id
        ));
    }
    output
}

/// Format the expanded view of one entry: title, date, id, then each
/// answered prompt with its label. Blank responses are skipped.
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", entry.kind.title()));
    output.push_str(&format!("{}\n", format_long_date(entry.date)));
    output.push_str(&format!("Id: {}\n", entry.id));

    for (key, value) in ordered_content(entry) {
        if value.trim().is_empty() {
            continue;
        }
        output.push_str(&format!("\n{}\n  {}\n", label_for(entry.kind, key), value));
    }

    output
}

/// Content pairs in prompt-catalog order, followed by any keys outside
/// the catalog in map order.
fn ordered_content(entry: &JournalEntry) -> Vec<(&str, &str)> {
    let catalog = prompts_for(entry.kind);
    let mut pairs = Vec::new();

    for prompt in catalog {
        if let Some(value) = entry.content.get(prompt.id) {
            pairs.push((prompt.id, value.as_str()));
        }
    }
    for (key, value) in &entry.content {
        if !catalog.iter().any(|p| p.id == key) {
            pairs.push((key.as_str(), value.as_str()));
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryKind;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn sample_entry() -> JournalEntry {
        let mut content = BTreeMap::new();
        content.insert("gratitude".to_string(), "coffee".to_string());
        content.insert("intention".to_string(), "focus".to_string());
        content.insert("goals".to_string(), "   ".to_string());
        content.insert("mood".to_string(), "calm".to_string());
        JournalEntry {
            id: "morning-1700000000000".to_string(),
            date: "2024-11-01".parse().unwrap(),
            kind: EntryKind::Morning,
            content,
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            updated_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(0), "Good Morning");
        assert_eq!(greeting(11), "Good Morning");
        assert_eq!(greeting(12), "Good Afternoon");
        assert_eq!(greeting(17), "Good Afternoon");
        assert_eq!(greeting(18), "Good Evening");
        assert_eq!(greeting(23), "Good Evening");
    }

    #[test]
    fn test_format_long_date() {
        let date: NaiveDate = "2024-11-01".parse().unwrap();
        assert_eq!(format_long_date(date), "Friday, November 1, 2024");
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_entry_list(&[]);
        assert!(output.contains("No journal entries yet"));
    }

    #[test]
    fn test_format_entry_list_rows() {
        let entry = sample_entry();
        let output = format_entry_list(std::slice::from_ref(&entry));
        assert!(output.contains("Friday, November 1, 2024"));
        assert!(output.contains("Morning Journal"));
        assert!(output.contains("morning-1700000000000"));
    }

    #[test]
    fn test_format_entry_labels_and_order() {
        let entry = sample_entry();
        let output = format_entry(&entry);

        assert!(output.starts_with("Morning Journal\n"));
        assert!(output.contains("Id: morning-1700000000000"));
        assert!(output.contains("What are you grateful for today?\n  coffee"));
        assert!(output.contains("What is your intention for today?\n  focus"));

        // Catalog order before extras
        let gratitude_pos = output.find("grateful").unwrap();
        let intention_pos = output.find("intention for today").unwrap();
        let mood_pos = output.find("Mood").unwrap();
        assert!(gratitude_pos < intention_pos);
        assert!(intention_pos < mood_pos);
    }

    #[test]
    fn test_format_entry_skips_blank_responses() {
        let entry = sample_entry();
        let output = format_entry(&entry);
        assert!(!output.contains("priorities"));
    }
}
