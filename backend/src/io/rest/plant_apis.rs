//! # REST API for Plants
//!
//! Listing plants, planting seeds, and changing a plant's state.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use shared::{CreatePlantRequest, Plant, PlantListResponse, UpdatePlantStateRequest};
use tracing::info;

use super::mappers::PlantMapper;
use super::ListQuery;
use crate::domain::GardenError;
use crate::AppState;

/// List plants, most recent first
pub async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PlantListResponse>, GardenError> {
    info!("GET /api/plants - query: {:?}", query);

    let plants = state.plant_service.list_plants(query.limit).await?;
    Ok(Json(PlantMapper::to_list_dto(plants)))
}

/// Plant a new seed
pub async fn create_plant(
    State(state): State<AppState>,
    Json(request): Json<CreatePlantRequest>,
) -> Result<(StatusCode, Json<Plant>), GardenError> {
    info!("POST /api/plants - request: {:?}", request);

    let plant = state.plant_service.create_plant(&request.label).await?;
    Ok((StatusCode::CREATED, Json(PlantMapper::to_dto(plant))))
}

/// Change the state of a plant
pub async fn update_plant_state(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
    Json(request): Json<UpdatePlantStateRequest>,
) -> Result<Json<Plant>, GardenError> {
    info!("PATCH /api/plants/{} - request: {:?}", plant_id, request);

    let plant = state
        .plant_service
        .set_plant_state(&plant_id, request.state)
        .await?;
    Ok(Json(PlantMapper::to_dto(plant)))
}
