use shared::{Plant, PlantListResponse};

use crate::domain::models::{format_timestamp, PlantRecord};

/// Mapper from domain plant records to shared Plant DTOs.
pub struct PlantMapper;

impl PlantMapper {
    pub fn to_dto(domain: PlantRecord) -> Plant {
        Plant {
            created_at: format_timestamp(&domain.created_at),
            id: domain.id,
            label: domain.label,
            state: domain.state,
        }
    }

    pub fn to_list_dto(domain_plants: Vec<PlantRecord>) -> PlantListResponse {
        PlantListResponse {
            plants: domain_plants.into_iter().map(Self::to_dto).collect(),
        }
    }
}
