//! Reflection prompt catalog for morning and evening entries

use crate::domain::EntryKind;

/// A single reflection prompt shown when composing an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub const MORNING_PROMPTS: &[Prompt] = &[
    Prompt {
        id: "gratitude",
        label: "What are you grateful for today?",
        placeholder: "List 3 things you're grateful for...",
    },
    Prompt {
        id: "intention",
        label: "What is your intention for today?",
        placeholder: "What do you want to focus on or achieve today?",
    },
    Prompt {
        id: "goals",
        label: "What are your top 3 priorities today?",
        placeholder: "1. 2. 3.",
    },
    Prompt {
        id: "affirmation",
        label: "Write a positive affirmation",
        placeholder: "I am...",
    },
];

pub const EVENING_PROMPTS: &[Prompt] = &[
    Prompt {
        id: "highlights",
        label: "What were the highlights of your day?",
        placeholder: "Describe the best moments of your day...",
    },
    Prompt {
        id: "challenges",
        label: "What challenges did you face?",
        placeholder: "What difficulties did you encounter and how did you handle them?",
    },
    Prompt {
        id: "learnings",
        label: "What did you learn today?",
        placeholder: "Any insights, lessons, or realizations?",
    },
    Prompt {
        id: "accomplishments",
        label: "What did you accomplish today?",
        placeholder: "List what you completed or made progress on...",
    },
    Prompt {
        id: "improvements",
        label: "What could you improve tomorrow?",
        placeholder: "What would you do differently?",
    },
];

/// Get the prompt set for an entry kind
pub fn prompts_for(kind: EntryKind) -> &'static [Prompt] {
    match kind {
        EntryKind::Morning => MORNING_PROMPTS,
        EntryKind::Evening => EVENING_PROMPTS,
    }
}

/// Display label for a content key.
///
/// Content keys are not schema-validated, so keys outside the catalog
/// fall back to the capitalized key itself.
pub fn label_for(kind: EntryKind, key: &str) -> String {
    prompts_for(kind)
        .iter()
        .find(|p| p.id == key)
        .map(|p| p.label.to_string())
        .unwrap_or_else(|| capitalize(key))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_sets_per_kind() {
        assert_eq!(prompts_for(EntryKind::Morning).len(), 4);
        assert_eq!(prompts_for(EntryKind::Evening).len(), 5);
    }

    #[test]
    fn test_prompt_ids_are_unique() {
        for prompts in [MORNING_PROMPTS, EVENING_PROMPTS] {
            for (i, prompt) in prompts.iter().enumerate() {
                assert!(
                    !prompts[i + 1..].iter().any(|p| p.id == prompt.id),
                    "duplicate prompt id: {}",
                    prompt.id
                );
            }
        }
    }

    #[test]
    fn test_label_for_catalog_key() {
        assert_eq!(
            label_for(EntryKind::Morning, "gratitude"),
            "What are you grateful for today?"
        );
        assert_eq!(
            label_for(EntryKind::Evening, "improvements"),
            "What could you improve tomorrow?"
        );
    }

    #[test]
    fn test_label_for_unknown_key_capitalizes() {
        assert_eq!(label_for(EntryKind::Morning, "mood"), "Mood");
        assert_eq!(label_for(EntryKind::Evening, ""), "");
    }
}
