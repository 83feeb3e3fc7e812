//! Store settings row (singleton)

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// Store-wide settings, a single row keyed `store_settings:main`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    pub store_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// Rental hours included in the base price
    pub base_rental_hours: u32,
    /// ISO 4217 code, display only
    pub currency: String,
    pub max_images_per_product: u32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            id: None,
            store_name: "Fiesta Rentals".to_string(),
            contact_email: "hello@example.com".to_string(),
            contact_phone: String::new(),
            base_rental_hours: 4,
            currency: "EUR".to_string(),
            max_images_per_product: 3,
        }
    }
}
