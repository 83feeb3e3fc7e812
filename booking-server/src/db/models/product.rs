//! Product row

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub name: String,
    pub description: Option<String>,
    /// Category reference
    #[serde(with = "serde_thing")]
    pub category: Thing,
    /// Price per booking in whole currency units
    pub base_price: f64,
    /// Percentage of base price charged per extra hour (e.g., 15 = 15%)
    #[serde(default)]
    pub extra_hour_percentage: f64,
    /// Uploaded image filenames, newest last (max enforced by handler)
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
