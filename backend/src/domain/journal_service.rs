use chrono::Utc;
use shared::{validate_journal_content, RECENT_JOURNAL_LIMIT};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::{GardenError, GardenResult};
use crate::domain::models::JournalRecord;
use crate::storage::JournalStorage;

/// Upper bound on a single journal listing
pub const MAX_JOURNAL_PAGE: u32 = 100;

/// Service for writing and reading journal entries
#[derive(Clone)]
pub struct JournalService {
    storage: Arc<dyn JournalStorage>,
}

impl JournalService {
    pub fn new(storage: Arc<dyn JournalStorage>) -> Self {
        Self { storage }
    }

    /// Save a new entry. The stored content is trimmed.
    pub async fn create_journal(&self, content: &str) -> GardenResult<JournalRecord> {
        let content =
            validate_journal_content(content).map_err(|e| GardenError::Validation(e.to_string()))?;
        let journal = JournalRecord::new(content, Utc::now());

        self.storage.store_journal(&journal).await?;
        info!("Created journal entry {}", journal.id);

        Ok(journal)
    }

    pub async fn get_journal(&self, journal_id: &str) -> GardenResult<JournalRecord> {
        match self.storage.get_journal(journal_id).await? {
            Some(journal) => Ok(journal),
            None => {
                warn!("Journal entry not found: {}", journal_id);
                Err(GardenError::NotFound {
                    entity: "Journal entry",
                    id: journal_id.to_string(),
                })
            }
        }
    }

    /// Most recent entries first; defaults to the garden's page size
    pub async fn list_recent(&self, limit: Option<u32>) -> GardenResult<Vec<JournalRecord>> {
        let limit = limit.unwrap_or(RECENT_JOURNAL_LIMIT).min(MAX_JOURNAL_PAGE);
        let journals = self.storage.list_journals(Some(limit)).await?;
        info!("Returning {} journal entries", journals.len());
        Ok(journals)
    }
}
