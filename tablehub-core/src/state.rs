//! Session State
//!
//! Bundles the three stores for one user session. There is no ambient
//! global: whatever serves requests owns a `SessionState` and passes it
//! down. The passthrough methods thread the catalog reference into the
//! ledgers so callers don't have to.

use rust_decimal::Decimal;

use crate::error::AppResult;
use crate::models::{Booking, BookingRequest, Offer, OfferCreate, RedeemedOffer, Restaurant};
use crate::seed;
use crate::statistics::{
    self, OfferShare, OverviewStats, RestaurantBookings, RestaurantPerformance,
};
use crate::store::{BookingLedger, CatalogStore, RedemptionLedger};

/// One in-memory session: catalog plus both ledgers
pub struct SessionState {
    pub catalog: CatalogStore,
    pub bookings: BookingLedger,
    pub redemptions: RedemptionLedger,
}

impl SessionState {
    /// Start a session from caller-supplied catalog contents.
    pub fn new(restaurants: Vec<Restaurant>, offers: Vec<Offer>) -> Self {
        Self {
            catalog: CatalogStore::new(restaurants, offers),
            bookings: BookingLedger::new(),
            redemptions: RedemptionLedger::new(),
        }
    }

    /// Start a session with the canonical demo dataset.
    pub fn with_seed_data() -> Self {
        Self::new(seed::restaurants(), seed::offers())
    }

    // ── Catalog passthroughs ────────────────────────────────────────

    pub fn update_seat_price(&self, restaurant_id: &str, new_price: Decimal) -> AppResult<()> {
        self.catalog.update_seat_price(restaurant_id, new_price)
    }

    pub fn add_offer(&self, payload: OfferCreate) -> AppResult<Offer> {
        self.catalog.add_offer(payload)
    }

    pub fn remove_offer(&self, offer_id: &str) -> AppResult<()> {
        self.catalog.remove_offer(offer_id)
    }

    // ── Ledger operations ───────────────────────────────────────────

    pub fn create_booking(&self, request: BookingRequest) -> AppResult<Booking> {
        self.bookings.create_booking(&self.catalog, request)
    }

    pub fn redeem_offer(&self, offer_id: &str) -> AppResult<RedeemedOffer> {
        self.redemptions.redeem(&self.catalog, offer_id)
    }

    // ── Statistics (recomputed from fresh snapshots) ────────────────

    pub fn overview(&self) -> OverviewStats {
        statistics::overview(
            &self.catalog.restaurants(),
            &self.catalog.offers(),
            &self.bookings.list_all(),
        )
    }

    pub fn bookings_by_restaurant(&self) -> Vec<RestaurantBookings> {
        statistics::bookings_by_restaurant(&self.catalog.restaurants(), &self.bookings.list_all())
    }

    pub fn offer_distribution(&self) -> Vec<OfferShare> {
        statistics::offer_distribution(&self.catalog.restaurants(), &self.catalog.offers())
    }

    pub fn recent_bookings(&self, n: usize) -> Vec<Booking> {
        statistics::recent_bookings(&self.bookings.list_all(), n)
    }

    pub fn recent_redemptions(&self, n: usize) -> Vec<RedeemedOffer> {
        statistics::recent_redemptions(&self.redemptions.list_all(), n)
    }

    pub fn restaurant_performance(&self) -> Vec<RestaurantPerformance> {
        statistics::restaurant_performance(
            &self.catalog.restaurants(),
            &self.catalog.offers(),
            &self.bookings.list_all(),
        )
    }
}
