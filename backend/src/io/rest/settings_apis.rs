use axum::{extract::State, response::Json};
use shared::GardenSettings;

use crate::AppState;

/// Limits the garden is running with
pub async fn get_settings(State(state): State<AppState>) -> Json<GardenSettings> {
    Json(GardenSettings {
        max_active_plants: state.plant_service.max_active(),
    })
}
