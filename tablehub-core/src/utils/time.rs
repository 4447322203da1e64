//! Date helpers
//!
//! Booking dates and offer expiry are `NaiveDate`, so ordering is true
//! calendar comparison. Date strings only appear at the parsing boundary;
//! lexicographic comparison of raw strings is never used for ordering.

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = parse_date("2025-01-05").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_date("05/01/2025"),
            Err(AppError::Validation(_))
        ));
    }
}
