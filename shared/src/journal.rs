//! Journal text rules shared by the journal/seed screens and the backend.

use crate::SEED_LABEL_MAX_CHARS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JournalValidationError {
    #[error("Write anything, even one word")]
    Empty,
}

/// Trim a draft entry, rejecting one with nothing left
pub fn validate_journal_content(content: &str) -> Result<String, JournalValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(JournalValidationError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Label suggestion for a seed: the first line of the entry, at most
/// `SEED_LABEL_MAX_CHARS` characters
pub fn derive_seed_label(content: &str) -> String {
    let first_line = content.split('\n').next().unwrap_or_default();
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    first_line.chars().take(SEED_LABEL_MAX_CHARS).collect()
}

/// What the "plant" action on the seed screen does with the current label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedDecision {
    /// Create a seed with this (trimmed) label
    Plant(String),
    /// Nothing to plant; go straight to the garden
    Skip,
}

impl SeedDecision {
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            SeedDecision::Skip
        } else {
            SeedDecision::Plant(trimmed.to_string())
        }
    }
}
