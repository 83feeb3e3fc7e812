//! Zone row

use super::serde_thing;
use serde::{Deserialize, Serialize};
use shared::models::GeoPoint;
use surrealdb::sql::Thing;

/// Delivery zone entity: admin-drawn polygon with a flat transport fee.
/// The polygon is opaque to the server; pricing only reads `transport_cost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub name: String,
    #[serde(default)]
    pub polygon: Vec<GeoPoint>,
    pub transport_cost: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
