//! Booking Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Confirmed booking record
///
/// Append-only: never mutated or deleted. `restaurant_name` and
/// `total_price` are snapshots taken at booking time, so later renames or
/// seat price changes do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub date: NaiveDate,
    /// Opaque slot label, e.g. "7:00 PM"
    pub time: String,
    pub guests: i32,
    /// guests x seat price in effect at booking time
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

/// Booking request payload (id and total assigned by the ledger)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub restaurant_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: i32,
}
