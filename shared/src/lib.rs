use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod epoch;
pub mod garden;
pub mod journal;

pub use epoch::{EpochToken, RequestEpoch};
pub use garden::{active_count, can_activate, next_state};
pub use journal::{derive_seed_label, validate_journal_content, JournalValidationError, SeedDecision};

/// Number of plants that may be `active` at the same time unless configured otherwise
pub const DEFAULT_MAX_ACTIVE: usize = 2;

/// How many journal entries the garden shows
pub const RECENT_JOURNAL_LIMIT: u32 = 5;

/// Maximum length (in characters) of a label pre-filled from a journal entry
pub const SEED_LABEL_MAX_CHARS: usize = 60;

/// Name of the query parameter carrying a journal id from the journal screen to the seed screen
pub const JOURNAL_ID_PARAM: &str = "journalId";

/// Lifecycle state of a plant. A plant that is "resting" is back in `Seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantState {
    Seed,
    Active,
}

impl PlantState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantState::Seed => "seed",
            PlantState::Active => "active",
        }
    }
}

impl fmt::Display for PlantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seed" => Ok(PlantState::Seed),
            "active" => Ok(PlantState::Active),
            other => Err(format!("Unknown plant state: {}", other)),
        }
    }
}

/// A tracked intention with a coarse lifecycle state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    /// Short user-supplied label
    pub label: String,
    pub state: PlantState,
    /// Creation timestamp assigned by the store (RFC 3339)
    pub created_at: String,
}

/// A free-text, immutable note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    /// Creation timestamp assigned by the store (RFC 3339)
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlantRequest {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlantStateRequest {
    pub state: PlantState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJournalRequest {
    pub content: String,
}

/// Plants ordered newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantListResponse {
    pub plants: Vec<Plant>,
}

/// Journal entries ordered newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalListResponse {
    pub journals: Vec<JournalEntry>,
}

/// Limits the backend is running with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenSettings {
    pub max_active_plants: usize,
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            max_active_plants: DEFAULT_MAX_ACTIVE,
        }
    }
}

/// Body of every non-2xx response from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
}

/// A log line forwarded from the browser to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Query string of the seed screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedQuery {
    #[serde(rename = "journalId", default, skip_serializing_if = "Option::is_none")]
    pub journal_id: Option<String>,
}

impl SeedQuery {
    pub fn for_journal(journal_id: impl Into<String>) -> Self {
        Self {
            journal_id: Some(journal_id.into()),
        }
    }

    /// The referenced journal id, treating an empty parameter as absent
    pub fn journal_id(&self) -> Option<&str> {
        self.journal_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_state_wire_format() {
        let json = serde_json::to_string(&PlantState::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let parsed: PlantState = serde_json::from_str("\"seed\"").unwrap();
        assert_eq!(parsed, PlantState::Seed);

        assert!(serde_json::from_str::<PlantState>("\"resting\"").is_err());
    }

    #[test]
    fn test_plant_state_from_str() {
        assert_eq!("active".parse::<PlantState>(), Ok(PlantState::Active));
        assert_eq!("seed".parse::<PlantState>(), Ok(PlantState::Seed));
        assert!("Active".parse::<PlantState>().is_err());
    }

    #[test]
    fn test_seed_query_uses_journal_id_param() {
        let query = SeedQuery::for_journal("abc-123");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json[JOURNAL_ID_PARAM], "abc-123");

        let empty: SeedQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.journal_id(), None);
    }

    #[test]
    fn test_seed_query_blank_id_is_absent() {
        let query = SeedQuery::for_journal("  ");
        assert_eq!(query.journal_id(), None);
    }
}
