//! Availability matching
//!
//! Administrators publish (date, hour) slots. The storefront asks which
//! hours are open on a chosen day and which days have any opening at
//! all. Date keys are always built from local calendar fields, never by
//! converting through UTC, so a slot published on the 5th never shows
//! up under the 4th for hosts behind UTC.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Local};

use crate::db::models::AvailabilitySlot;

/// Hours open on `selected_date`, sorted and deduplicated
///
/// An empty result means the day is fully booked or was never
/// published; the caller clears any previously chosen hour.
pub fn filter_available_hours(slots: &[AvailabilitySlot], selected_date: &str) -> Vec<String> {
    let mut hours: Vec<String> = slots
        .iter()
        .filter(|s| s.date == selected_date)
        .map(|s| s.hour.clone())
        .collect();
    hours.sort();
    hours.dedup();
    hours
}

/// Dates with at least one published hour, as sorted `YYYY-MM-DD` keys
pub fn available_date_keys(slots: &[AvailabilitySlot]) -> BTreeSet<String> {
    slots.iter().map(|s| s.date.clone()).collect()
}

/// `YYYY-MM-DD` key from the datetime's local calendar fields
///
/// Formatting must go through year/month/day accessors, not a UTC
/// timestamp, so the key round-trips regardless of the host offset.
pub fn local_date_key(datetime: &DateTime<Local>) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        datetime.year(),
        datetime.month(),
        datetime.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn slot(date: &str, hour: &str) -> AvailabilitySlot {
        AvailabilitySlot::new(date, hour)
    }

    #[test]
    fn filters_hours_by_date() {
        let slots = vec![
            slot("2026-09-05", "16:00"),
            slot("2026-09-05", "12:00"),
            slot("2026-09-06", "10:00"),
        ];
        assert_eq!(
            filter_available_hours(&slots, "2026-09-05"),
            vec!["12:00", "16:00"]
        );
    }

    #[test]
    fn duplicate_hours_collapse() {
        let slots = vec![
            slot("2026-09-05", "12:00"),
            slot("2026-09-05", "12:00"),
        ];
        assert_eq!(filter_available_hours(&slots, "2026-09-05"), vec!["12:00"]);
    }

    #[test]
    fn unknown_date_yields_empty() {
        let slots = vec![slot("2026-09-05", "12:00")];
        assert!(filter_available_hours(&slots, "2026-09-07").is_empty());
    }

    #[test]
    fn date_keys_are_sorted_and_unique() {
        let slots = vec![
            slot("2026-09-06", "10:00"),
            slot("2026-09-05", "12:00"),
            slot("2026-09-05", "16:00"),
        ];
        let keys: Vec<String> = available_date_keys(&slots).into_iter().collect();
        assert_eq!(keys, vec!["2026-09-05", "2026-09-06"]);
    }

    #[test]
    fn local_date_key_uses_calendar_fields() {
        // Midnight local time stays on its own day however the host
        // offset relates to UTC.
        let dt = Local.with_ymd_and_hms(2026, 9, 5, 0, 0, 0).unwrap();
        assert_eq!(local_date_key(&dt), "2026-09-05");

        let late = Local.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(local_date_key(&late), "2026-12-31");
    }

    #[test]
    fn local_date_key_zero_pads() {
        let dt = Local.with_ymd_and_hms(2026, 1, 3, 9, 0, 0).unwrap();
        assert_eq!(local_date_key(&dt), "2026-01-03");
    }
}
