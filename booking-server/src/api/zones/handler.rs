//! Delivery zone handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Zone;
use crate::db::repository::ZoneRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{ZoneCreate, ZoneUpdate};

/// GET /api/zones - active zones for the storefront address step
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Zone>>> {
    let repo = ZoneRepository::new(state.db.clone());
    Ok(Json(repo.find_active().await?))
}

/// GET /api/zones/all - every zone, including inactive
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Zone>>> {
    let repo = ZoneRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/zones/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Zone>> {
    let repo = ZoneRepository::new(state.db.clone());
    let zone = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Zone {} not found", id)))?;
    Ok(Json(zone))
}

/// POST /api/zones
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ZoneCreate>,
) -> AppResult<Json<Zone>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let repo = ZoneRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PUT /api/zones/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ZoneUpdate>,
) -> AppResult<Json<Zone>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    let repo = ZoneRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/zones/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ZoneRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(true))
}
