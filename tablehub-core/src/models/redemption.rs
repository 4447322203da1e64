//! Redeemed Offer Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Redemption record
///
/// Fully denormalized snapshot of the offer at redemption time. The offer
/// itself may be deleted later; the record stands on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemedOffer {
    pub id: String,
    pub restaurant_name: String,
    pub offer_title: String,
    pub discount: String,
    pub redeemed_at: DateTime<Utc>,
}
