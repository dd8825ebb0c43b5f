use chrono::Utc;
use shared::PlantState;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::error::{GardenError, GardenResult};
use crate::domain::models::PlantRecord;
use crate::storage::PlantStorage;

/// Longest label accepted for a plant
pub const MAX_LABEL_CHARS: usize = 200;

/// Service for planting seeds and moving plants between `seed` and `active`
#[derive(Clone)]
pub struct PlantService {
    storage: Arc<dyn PlantStorage>,
    max_active: usize,
}

impl PlantService {
    pub fn new(storage: Arc<dyn PlantStorage>, max_active: usize) -> Self {
        Self { storage, max_active }
    }

    /// The activation cap this service enforces
    pub fn max_active(&self) -> usize {
        self.max_active
    }

    /// List plants, most recent first
    pub async fn list_plants(&self, limit: Option<u32>) -> GardenResult<Vec<PlantRecord>> {
        let plants = self.storage.list_plants(limit).await?;
        info!("Found {} plants", plants.len());
        Ok(plants)
    }

    /// Plant a new seed with the given label
    pub async fn create_plant(&self, label: &str) -> GardenResult<PlantRecord> {
        let label = Self::validate_label(label)?;
        let plant = PlantRecord::new_seed(label, Utc::now());

        self.storage.store_plant(&plant).await?;
        info!("Planted seed '{}' with ID: {}", plant.label, plant.id);

        Ok(plant)
    }

    /// Move a plant to `state`.
    ///
    /// Resting (`seed`) is always allowed. Activation goes through the
    /// storage layer's conditional write so the cap holds across clients.
    pub async fn set_plant_state(&self, plant_id: &str, state: PlantState) -> GardenResult<PlantRecord> {
        info!("Setting plant {} to {}", plant_id, state);

        let plant = self.require_plant(plant_id).await?;

        match state {
            PlantState::Seed => {
                if !self.storage.update_plant_state(plant_id, PlantState::Seed).await? {
                    return Err(Self::not_found(plant_id));
                }
            }
            PlantState::Active if plant.is_active() => return Ok(plant),
            PlantState::Active => {
                if !self
                    .storage
                    .activate_plant_within_limit(plant_id, self.max_active)
                    .await?
                {
                    // Another writer may have activated this plant in between
                    let current = self.require_plant(plant_id).await?;
                    if current.is_active() {
                        return Ok(current);
                    }
                    warn!("Refusing to activate plant {}: {} already active", plant_id, self.max_active);
                    return Err(GardenError::ActiveLimitReached { max: self.max_active });
                }
            }
        }

        self.require_plant(plant_id).await
    }

    async fn require_plant(&self, plant_id: &str) -> GardenResult<PlantRecord> {
        self.storage
            .get_plant(plant_id)
            .await?
            .ok_or_else(|| Self::not_found(plant_id))
    }

    fn not_found(plant_id: &str) -> GardenError {
        GardenError::NotFound {
            entity: "Plant",
            id: plant_id.to_string(),
        }
    }

    fn validate_label(label: &str) -> GardenResult<String> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(GardenError::Validation("Plant label cannot be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_LABEL_CHARS {
            return Err(GardenError::Validation(format!(
                "Plant label cannot exceed {} characters",
                MAX_LABEL_CHARS
            )));
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, PlantRepository};

    async fn create_test_service(max_active: usize) -> PlantService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        PlantService::new(Arc::new(PlantRepository::new(db)), max_active)
    }

    async fn active_count(service: &PlantService) -> usize {
        service
            .list_plants(None)
            .await
            .unwrap()
            .iter()
            .filter(|p| p.is_active())
            .count()
    }

    #[tokio::test]
    async fn test_create_plant_starts_as_seed() {
        let service = create_test_service(2).await;
        let plant = service.create_plant("  Meals feel scary lately ").await.unwrap();

        assert_eq!(plant.label, "Meals feel scary lately");
        assert_eq!(plant.state, PlantState::Seed);
    }

    #[tokio::test]
    async fn test_create_plant_rejects_empty_label() {
        let service = create_test_service(2).await;
        let result = service.create_plant("   ").await;

        assert!(matches!(result, Err(GardenError::Validation(_))));
        assert!(service.list_plants(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_plant_rejects_long_label() {
        let service = create_test_service(2).await;
        let result = service.create_plant(&"x".repeat(MAX_LABEL_CHARS + 1)).await;
        assert!(matches!(result, Err(GardenError::Validation(_))));
    }

    #[tokio::test]
    async fn test_activation_cap_is_enforced() {
        let service = create_test_service(2).await;
        let a = service.create_plant("a").await.unwrap();
        let b = service.create_plant("b").await.unwrap();
        let c = service.create_plant("c").await.unwrap();

        service.set_plant_state(&a.id, PlantState::Active).await.unwrap();
        service.set_plant_state(&b.id, PlantState::Active).await.unwrap();

        let result = service.set_plant_state(&c.id, PlantState::Active).await;
        match result {
            Err(GardenError::ActiveLimitReached { max }) => assert_eq!(max, 2),
            other => panic!("Expected ActiveLimitReached, got {:?}", other),
        }
        assert_eq!(active_count(&service).await, 2);
    }

    #[tokio::test]
    async fn test_resting_is_unconditional() {
        let service = create_test_service(1).await;
        let a = service.create_plant("a").await.unwrap();
        service.set_plant_state(&a.id, PlantState::Active).await.unwrap();

        let rested = service.set_plant_state(&a.id, PlantState::Seed).await.unwrap();
        assert_eq!(rested.state, PlantState::Seed);
    }

    #[tokio::test]
    async fn test_activating_active_plant_is_noop() {
        let service = create_test_service(1).await;
        let a = service.create_plant("a").await.unwrap();
        service.set_plant_state(&a.id, PlantState::Active).await.unwrap();

        let again = service.set_plant_state(&a.id, PlantState::Active).await.unwrap();
        assert_eq!(again.state, PlantState::Active);
        assert_eq!(active_count(&service).await, 1);
    }

    #[tokio::test]
    async fn test_unknown_plant() {
        let service = create_test_service(2).await;
        let result = service.set_plant_state("missing", PlantState::Seed).await;
        assert!(matches!(result, Err(GardenError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_toggle_sequence_never_exceeds_cap() {
        let service = create_test_service(2).await;
        let mut ids = Vec::new();
        for label in ["a", "b", "c", "d"] {
            ids.push(service.create_plant(label).await.unwrap().id);
        }

        let sequence = [0, 1, 2, 0, 3, 2, 1, 1, 3, 0, 2];
        for &index in &sequence {
            let plant = service.require_plant(&ids[index]).await.unwrap();
            let next = if plant.is_active() {
                PlantState::Seed
            } else {
                PlantState::Active
            };
            let _ = service.set_plant_state(&plant.id, next).await;
            assert!(active_count(&service).await <= 2);
        }
    }

    #[tokio::test]
    async fn test_concurrent_activations_respect_cap() {
        let service = create_test_service(2).await;
        let mut ids = Vec::new();
        for i in 0..6 {
            ids.push(service.create_plant(&format!("plant {}", i)).await.unwrap().id);
        }

        let handles: Vec<_> = ids
            .iter()
            .cloned()
            .map(|id| {
                let service = service.clone();
                tokio::spawn(async move { service.set_plant_state(&id, PlantState::Active).await })
            })
            .collect();

        let mut activated = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                activated += 1;
            }
        }

        assert_eq!(activated, 2);
        assert_eq!(active_count(&service).await, 2);
    }
}
