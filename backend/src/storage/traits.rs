//! # Storage Traits
//!
//! The table operations the domain layer relies on. Implementations own
//! ordering (newest first) and the atomicity of the conditional activation.

use anyhow::Result;
use async_trait::async_trait;
use shared::PlantState;

use crate::domain::models::{JournalRecord, PlantRecord};

#[async_trait]
pub trait PlantStorage: Send + Sync {
    /// Insert a new plant
    async fn store_plant(&self, plant: &PlantRecord) -> Result<()>;

    /// Retrieve a plant by ID
    async fn get_plant(&self, plant_id: &str) -> Result<Option<PlantRecord>>;

    /// List plants ordered by creation time, most recent first
    async fn list_plants(&self, limit: Option<u32>) -> Result<Vec<PlantRecord>>;

    /// Set a plant's state unconditionally.
    /// Returns false when no plant has this ID.
    async fn update_plant_state(&self, plant_id: &str, state: PlantState) -> Result<bool>;

    /// Move a plant to `active` only while fewer than `max_active` plants are
    /// active, as a single atomic write.
    /// Returns false when the plant is missing, already active, or the cap is full.
    async fn activate_plant_within_limit(&self, plant_id: &str, max_active: usize) -> Result<bool>;
}

#[async_trait]
pub trait JournalStorage: Send + Sync {
    /// Insert a new journal entry
    async fn store_journal(&self, journal: &JournalRecord) -> Result<()>;

    /// Retrieve a journal entry by ID
    async fn get_journal(&self, journal_id: &str) -> Result<Option<JournalRecord>>;

    /// List journal entries ordered by creation time, most recent first
    async fn list_journals(&self, limit: Option<u32>) -> Result<Vec<JournalRecord>>;
}
