//! Availability payloads

use serde::{Deserialize, Serialize};

/// Create a single bookable (date, hour) slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlotCreate {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub hour: String,
}

/// Publish a full day at once: replaces the published hours for `date`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityPublish {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` entries; empty list unpublishes the day
    pub hours: Vec<String>,
}
