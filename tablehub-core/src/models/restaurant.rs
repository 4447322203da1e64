//! Restaurant Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant entity
///
/// Seeded at process start and alive for the process lifetime. Every field
/// except `seat_price` is frozen after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    /// Image URL; rendering and fallback belong to the presentation layer
    pub image: String,
    pub description: String,
    /// Per-guest price used to compute booking totals (non-negative)
    #[serde(with = "rust_decimal::serde::float")]
    pub seat_price: Decimal,
}
