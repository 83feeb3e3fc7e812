//! Product payloads

use serde::{Deserialize, Serialize};

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    /// Category reference (String ID, required)
    pub category: String,
    /// Price per booking in whole currency units
    pub base_price: f64,
    /// Percentage of base price charged per extra hour (e.g., 15 = 15%)
    pub extra_hour_percentage: Option<f64>,
    /// Uploaded image filenames (max count enforced by the handler)
    pub images: Option<Vec<String>>,
    pub sort_order: Option<i32>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub base_price: Option<f64>,
    pub extra_hour_percentage: Option<f64>,
    pub images: Option<Vec<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
