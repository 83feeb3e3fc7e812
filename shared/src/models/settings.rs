//! Store settings payload

use serde::{Deserialize, Serialize};

/// Update store settings payload (singleton row, merge semantics:
/// absent fields are left untouched)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Rental hours included in the base price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rental_hours: Option<u32>,
    /// ISO 4217 code used for display only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_images_per_product: Option<u32>,
}
