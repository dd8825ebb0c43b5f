//! # REST API for Journal Entries

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use shared::{CreateJournalRequest, JournalEntry, JournalListResponse};
use tracing::info;

use super::mappers::JournalMapper;
use super::ListQuery;
use crate::domain::GardenError;
use crate::AppState;

/// List the most recent journal entries
pub async fn list_journals(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<JournalListResponse>, GardenError> {
    info!("GET /api/journals - query: {:?}", query);

    let journals = state.journal_service.list_recent(query.limit).await?;
    Ok(Json(JournalMapper::to_list_dto(journals)))
}

/// Get a journal entry by ID
pub async fn get_journal(
    State(state): State<AppState>,
    Path(journal_id): Path<String>,
) -> Result<Json<JournalEntry>, GardenError> {
    info!("GET /api/journals/{}", journal_id);

    let journal = state.journal_service.get_journal(&journal_id).await?;
    Ok(Json(JournalMapper::to_dto(journal)))
}

/// Save a new journal entry, returning it with its generated ID
pub async fn create_journal(
    State(state): State<AppState>,
    Json(request): Json<CreateJournalRequest>,
) -> Result<(StatusCode, Json<JournalEntry>), GardenError> {
    info!("POST /api/journals - {} bytes", request.content.len());

    let journal = state.journal_service.create_journal(&request.content).await?;
    Ok((StatusCode::CREATED, Json(JournalMapper::to_dto(journal))))
}
