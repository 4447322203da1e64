//! Redemption Ledger
//!
//! Append-only list of redeemed offers plus the set of already-redeemed
//! offer ids. The set is what makes redemption at-most-once: an offer id
//! can enter it exactly once, and the membership check and the append
//! happen under the same write lock.

use std::collections::HashSet;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::RedeemedOffer;
use crate::store::CatalogStore;
use crate::utils::id::new_id;

const REDEMPTION_ID_PREFIX: &str = "r";

#[derive(Default)]
struct RedemptionInner {
    records: Vec<RedeemedOffer>,
    redeemed_ids: HashSet<String>,
}

/// Append-only ledger of offer redemptions
#[derive(Default)]
pub struct RedemptionLedger {
    inner: RwLock<RedemptionInner>,
}

impl RedemptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redeem an offer once.
    ///
    /// Fails `AlreadyRedeemed` on a repeat attempt and `NotFound` when the
    /// offer or its owning restaurant no longer exists. A repeat attempt
    /// always reports `AlreadyRedeemed`, even after the offer itself has
    /// been deleted. On success the record snapshots restaurant name, offer
    /// title and discount, so it survives later offer deletion.
    pub fn redeem(&self, catalog: &CatalogStore, offer_id: &str) -> AppResult<RedeemedOffer> {
        // Single write lock covers the membership check and both appends.
        // The check runs before the catalog lookups: once redeemed, always
        // AlreadyRedeemed, regardless of what happened to the offer since.
        let mut inner = self.inner.write();
        if inner.redeemed_ids.contains(offer_id) {
            return Err(AppError::already_redeemed(offer_id));
        }

        let offer = catalog
            .offer(offer_id)
            .ok_or_else(|| AppError::not_found(format!("Offer {} not found", offer_id)))?;
        let restaurant = catalog.restaurant(&offer.restaurant_id).ok_or_else(|| {
            AppError::not_found(format!("Restaurant {} not found", offer.restaurant_id))
        })?;

        let record = RedeemedOffer {
            id: new_id(REDEMPTION_ID_PREFIX),
            restaurant_name: restaurant.name,
            offer_title: offer.title,
            discount: offer.discount,
            redeemed_at: Utc::now(),
        };
        inner.redeemed_ids.insert(offer_id.to_string());
        inner.records.push(record.clone());
        info!(offer_id, redemption_id = %record.id, "offer redeemed");
        Ok(record)
    }

    /// Membership test against the redeemed-id set.
    pub fn is_redeemed(&self, offer_id: &str) -> bool {
        self.inner.read().redeemed_ids.contains(offer_id)
    }

    /// Snapshot of all redemption records, insertion order.
    pub fn list_all(&self) -> Vec<RedeemedOffer> {
        self.inner.read().records.clone()
    }
}
