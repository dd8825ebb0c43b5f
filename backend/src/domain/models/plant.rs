use chrono::{DateTime, SubsecRound, Utc};
use shared::PlantState;

#[derive(Debug, Clone, PartialEq)]
pub struct PlantRecord {
    pub id: String,
    pub label: String,
    pub state: PlantState,
    pub created_at: DateTime<Utc>,
}

impl PlantRecord {
    /// A freshly planted seed. `created_at` is kept at the precision the store holds.
    pub fn new_seed(label: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: super::generate_id(),
            label,
            state: PlantState::Seed,
            created_at: created_at.trunc_subsecs(6),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == PlantState::Active
    }
}
