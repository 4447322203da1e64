//! Offer Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Offer entity
///
/// `restaurant_id` is validated against the catalog at creation time and is
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub restaurant_id: String,
    pub title: String,
    pub description: String,
    /// Display label, e.g. "20% OFF", "BOGO"
    pub discount: String,
    pub valid_until: NaiveDate,
}

/// Create offer payload (id assigned by the catalog)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCreate {
    pub restaurant_id: String,
    pub title: String,
    pub description: String,
    pub discount: String,
    pub valid_until: NaiveDate,
}
