//! Reservation handlers
//!
//! Checkout recomputes every amount server-side from the live catalog
//! and freezes the result into the reservation row. Client-sent totals
//! are never trusted.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::booking::{self, CheckoutError};
use crate::core::ServerState;
use crate::db::models::{Product, Reservation};
use crate::db::repository::{
    AvailabilityRepository, ProductRepository, ReservationRepository, ZoneRepository,
};
use crate::pricing;
use crate::utils::time::{now_millis, parse_date, parse_hour};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{CheckoutRequest, ReservationStatus, StatusUpdateRequest};

impl From<CheckoutError> for AppError {
    fn from(e: CheckoutError) -> Self {
        match e {
            CheckoutError::EmptyCart => AppError::validation(e.to_string()),
            CheckoutError::UnknownProduct(_) => AppError::validation(e.to_string()),
            CheckoutError::InactiveProduct(_) => AppError::business_rule(e.to_string()),
            CheckoutError::Pricing(err) => AppError::validation(err.to_string()),
        }
    }
}

fn validate_checkout_payload(payload: &CheckoutRequest) -> AppResult<()> {
    validate_required_text(&payload.customer.name, "customer.name", MAX_NAME_LEN)?;
    validate_email(&payload.customer.email, "customer.email")?;
    validate_required_text(&payload.customer.phone, "customer.phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.event_address, "event_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    parse_date(&payload.event_date)?;
    parse_hour(&payload.event_hour)?;
    Ok(())
}

/// POST /api/reservations - storefront checkout
pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<Reservation>> {
    validate_checkout_payload(&payload)?;

    // The chosen (date, hour) must still be published
    let availability = AvailabilityRepository::new(state.db.clone());
    if !availability
        .exists(&payload.event_date, &payload.event_hour)
        .await?
    {
        return Err(AppError::business_rule(format!(
            "{} {} is not available",
            payload.event_date, payload.event_hour
        )));
    }

    // Transport fee comes from the delivery zone, frozen at booking time
    let zone = ZoneRepository::new(state.db.clone())
        .find_by_id(&payload.zone)
        .await?
        .ok_or_else(|| AppError::validation(format!("Unknown zone: {}", payload.zone)))?;
    if !zone.is_active {
        return Err(AppError::validation(format!(
            "Zone is not served: {}",
            zone.name
        )));
    }

    // Resolve the cart against the live catalog
    let product_repo = ProductRepository::new(state.db.clone());
    let mut products: Vec<Product> = Vec::with_capacity(payload.items.len());
    for line in &payload.items {
        let product = product_repo
            .find_by_id(&line.product)
            .await?
            .ok_or_else(|| AppError::validation(format!("Unknown product: {}", line.product)))?;
        products.push(product);
    }

    let items = booking::build_reservation_items(&payload.items, &products)?;
    let subtotal = booking::items_subtotal(&items).map_err(|e| AppError::validation(e.to_string()))?;
    let total = pricing::reservation_total(subtotal, zone.transport_cost)
        .map_err(|e| AppError::validation(e.to_string()))?;

    let reservation = Reservation {
        id: None,
        customer: payload.customer,
        event_date: payload.event_date,
        event_hour: payload.event_hour,
        event_address: payload.event_address,
        zone: zone.id.clone(),
        zone_name: zone.name.clone(),
        adults_count: payload.adults_count,
        children_count: payload.children_count,
        items,
        subtotal,
        transport_cost: zone.transport_cost,
        total,
        status: ReservationStatus::PendingPayment,
        notes: payload.notes,
        created_at: now_millis(),
    };

    let created = ReservationRepository::new(state.db.clone())
        .create(reservation)
        .await?;

    tracing::info!(
        reservation = %created.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
        total = created.total,
        "Reservation created"
    );

    // Best-effort confirmation mail, never blocks the response
    let mailer = state.mailer();
    let snapshot = created.clone();
    tokio::spawn(async move {
        mailer.notify_reservation_created(&snapshot).await;
    });

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct ReservationListQuery {
    pub status: Option<ReservationStatus>,
}

/// GET /api/reservations - admin listing, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReservationListQuery>,
) -> AppResult<Json<Vec<Reservation>>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservations = match query.status {
        Some(status) => repo.find_by_status(status).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(reservations))
}

/// GET /api/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let reservation = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// PUT /api/reservations/:id/status - validated lifecycle transition
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdateRequest>,
) -> AppResult<Json<Reservation>> {
    let repo = ReservationRepository::new(state.db.clone());
    let current = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;

    let old_status = current.status;
    let next = old_status
        .transition_to(payload.status)
        .map_err(|e| AppError::business_rule(e.to_string()))?;

    let updated = repo.update_status(&id, next).await?;

    tracing::info!(
        reservation = %id,
        from = old_status.as_str(),
        to = next.as_str(),
        "Reservation status changed"
    );

    let mailer = state.mailer();
    let snapshot = updated.clone();
    tokio::spawn(async move {
        mailer.notify_status_changed(&snapshot, old_status).await;
    });

    Ok(Json(updated))
}

/// DELETE /api/reservations/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ReservationRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(true))
}
