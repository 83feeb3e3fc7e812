//! Availability slot handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::booking;
use crate::core::ServerState;
use crate::db::models::AvailabilitySlot;
use crate::db::repository::AvailabilityRepository;
use crate::utils::AppResult;
use crate::utils::time::{parse_date, parse_hour};
use shared::models::{AvailabilityPublish, AvailabilitySlotCreate};

/// GET /api/availability - every published slot (back office)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    let repo = AvailabilityRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/availability/dates - days with at least one open hour
pub async fn dates(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let repo = AvailabilityRepository::new(state.db.clone());
    let slots = repo.find_all().await?;
    Ok(Json(
        booking::available_date_keys(&slots).into_iter().collect(),
    ))
}

/// GET /api/availability/hours/:date - open hours on one day
///
/// An empty list means the day is fully booked or unpublished.
pub async fn hours(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    parse_date(&date)?;
    let repo = AvailabilityRepository::new(state.db.clone());
    let slots = repo.find_by_date(&date).await?;
    Ok(Json(booking::filter_available_hours(&slots, &date)))
}

/// POST /api/availability - publish a single slot
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AvailabilitySlotCreate>,
) -> AppResult<Json<AvailabilitySlot>> {
    parse_date(&payload.date)?;
    parse_hour(&payload.hour)?;
    let repo = AvailabilityRepository::new(state.db.clone());
    Ok(Json(repo.create(&payload.date, &payload.hour).await?))
}

/// PUT /api/availability/publish - replace one day's hours
pub async fn publish(
    State(state): State<ServerState>,
    Json(payload): Json<AvailabilityPublish>,
) -> AppResult<Json<Vec<AvailabilitySlot>>> {
    parse_date(&payload.date)?;
    for hour in &payload.hours {
        parse_hour(hour)?;
    }
    let mut hours = payload.hours;
    hours.sort();
    hours.dedup();
    let repo = AvailabilityRepository::new(state.db.clone());
    Ok(Json(repo.replace_day(&payload.date, &hours).await?))
}

/// DELETE /api/availability/:id - retract a slot
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AvailabilityRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(true))
}
