//! Date and hour parsing
//!
//! Calendar dates travel as `YYYY-MM-DD` strings and hours as `HH:MM`,
//! validated at the API boundary. Repositories only ever see the
//! already-validated strings.

use chrono::{NaiveDate, NaiveTime};

use super::{AppError, AppResult};

/// Parse a calendar date string (`YYYY-MM-DD`)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse an hour string (`HH:MM`)
pub fn parse_hour(hour: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(hour, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid hour format: {}", hour)))
}

/// Current Unix time in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_date() {
        let d = parse_date("2024-12-24").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 12, 24).unwrap());
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(parse_date("24/12/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parses_valid_hour() {
        assert!(parse_hour("09:30").is_ok());
        assert!(parse_hour("00:00").is_ok());
        assert!(parse_hour("23:59").is_ok());
    }

    #[test]
    fn rejects_bad_hours() {
        assert!(parse_hour("24:00").is_err());
        assert!(parse_hour("9am").is_err());
        assert!(parse_hour("").is_err());
    }
}
