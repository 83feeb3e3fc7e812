//! Availability slot row

use super::serde_thing;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

/// A bookable (date, hour) pair published by an administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub hour: String,
}

impl AvailabilitySlot {
    pub fn new(date: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            id: None,
            date: date.into(),
            hour: hour.into(),
        }
    }
}
