//! Zone payloads
//!
//! A zone is an administrator-drawn delivery polygon carrying a flat
//! transport cost. The polygon is stored verbatim for the client map;
//! the server only ever looks the cost up by zone id.

use serde::{Deserialize, Serialize};

/// One polygon vertex (WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneCreate {
    pub name: String,
    pub polygon: Vec<GeoPoint>,
    /// Flat transport/installation fee for addresses inside this zone
    pub transport_cost: f64,
}

/// Update zone payload. Absent fields are left untouched (merge semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Vec<GeoPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
