//! Reservation row

use super::serde_thing;
use serde::{Deserialize, Serialize};
use shared::models::{CustomerInfo, ReservationItem, ReservationStatus};
use surrealdb::sql::Thing;

/// Reservation entity
///
/// Line items are frozen snapshots; `subtotal`, `transport_cost` and
/// `total` are computed once at checkout and never recomputed from the
/// live product catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub customer: CustomerInfo,
    /// `YYYY-MM-DD`
    pub event_date: String,
    /// `HH:MM`
    pub event_hour: String,
    pub event_address: String,
    /// Zone reference the transport fee was taken from
    #[serde(default, with = "serde_thing::option")]
    pub zone: Option<Thing>,
    pub zone_name: String,
    pub adults_count: u32,
    pub children_count: u32,
    pub items: Vec<ReservationItem>,
    /// Sum of item totals
    pub subtotal: f64,
    /// Flat fee frozen from the zone at booking time
    pub transport_cost: f64,
    /// subtotal + transport_cost
    pub total: f64,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    /// Unix millis
    pub created_at: i64,
}
