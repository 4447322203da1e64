//! Catalog Store
//!
//! Owns the restaurant list and the offer list. Restaurants are seeded at
//! construction and never added or removed; the only mutation is a seat
//! price update. Offers are admin-managed: created with a fresh id after
//! the restaurant foreign key is validated, and deletable.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{Offer, OfferCreate, Restaurant};
use crate::utils::id::new_id;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_LABEL_LEN, MAX_NAME_LEN, validate_required_text, validate_seat_price,
    validate_text_length,
};

const OFFER_ID_PREFIX: &str = "o";

struct CatalogInner {
    restaurants: Vec<Restaurant>,
    offers: Vec<Offer>,
}

/// In-memory catalog of restaurants and their offers
pub struct CatalogStore {
    inner: RwLock<CatalogInner>,
}

impl CatalogStore {
    /// Create a catalog from seeded restaurants and offers.
    ///
    /// Seed offers are trusted as-is (they come from the embedded seed data
    /// or a presentation-layer fixture); runtime-created offers go through
    /// [`CatalogStore::add_offer`] and are validated there.
    pub fn new(restaurants: Vec<Restaurant>, offers: Vec<Offer>) -> Self {
        debug!(
            restaurants = restaurants.len(),
            offers = offers.len(),
            "catalog initialized"
        );
        Self {
            inner: RwLock::new(CatalogInner {
                restaurants,
                offers,
            }),
        }
    }

    // ── Restaurants ─────────────────────────────────────────────────

    /// Snapshot of all restaurants, seed order.
    pub fn restaurants(&self) -> Vec<Restaurant> {
        self.inner.read().restaurants.clone()
    }

    /// Look up a single restaurant by id.
    pub fn restaurant(&self, restaurant_id: &str) -> Option<Restaurant> {
        self.inner
            .read()
            .restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned()
    }

    /// Replace a restaurant's seat price, leaving every other field and
    /// every other restaurant untouched.
    ///
    /// Future bookings use the new price; past bookings already carry their
    /// denormalized total and are unaffected.
    pub fn update_seat_price(&self, restaurant_id: &str, new_price: Decimal) -> AppResult<()> {
        validate_seat_price(new_price)?;

        let mut inner = self.inner.write();
        let restaurant = inner
            .restaurants
            .iter_mut()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| {
                AppError::not_found(format!("Restaurant {} not found", restaurant_id))
            })?;

        let old_price = restaurant.seat_price;
        restaurant.seat_price = new_price;
        info!(
            restaurant_id,
            %old_price,
            %new_price,
            "seat price updated"
        );
        Ok(())
    }

    // ── Offers ──────────────────────────────────────────────────────

    /// Snapshot of all offers, insertion order.
    pub fn offers(&self) -> Vec<Offer> {
        self.inner.read().offers.clone()
    }

    /// Look up a single offer by id.
    pub fn offer(&self, offer_id: &str) -> Option<Offer> {
        self.inner
            .read()
            .offers
            .iter()
            .find(|o| o.id == offer_id)
            .cloned()
    }

    /// All offers for one restaurant, insertion order.
    pub fn offers_for(&self, restaurant_id: &str) -> Vec<Offer> {
        self.inner
            .read()
            .offers
            .iter()
            .filter(|o| o.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    /// Validate and append a new offer, assigning a fresh id.
    pub fn add_offer(&self, payload: OfferCreate) -> AppResult<Offer> {
        validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
        validate_required_text(&payload.discount, "discount", MAX_LABEL_LEN)?;
        validate_text_length(&payload.description, "description", MAX_DESCRIPTION_LEN)?;

        let mut inner = self.inner.write();
        if !inner
            .restaurants
            .iter()
            .any(|r| r.id == payload.restaurant_id)
        {
            return Err(AppError::not_found(format!(
                "Restaurant {} not found",
                payload.restaurant_id
            )));
        }

        let offer = Offer {
            id: new_id(OFFER_ID_PREFIX),
            restaurant_id: payload.restaurant_id,
            title: payload.title,
            description: payload.description,
            discount: payload.discount,
            valid_until: payload.valid_until,
        };
        inner.offers.push(offer.clone());
        info!(offer_id = %offer.id, restaurant_id = %offer.restaurant_id, "offer added");
        Ok(offer)
    }

    /// Remove the offer with the given id.
    ///
    /// Unknown ids fail with `NotFound`, consistent with every other
    /// id-keyed operation in the crate.
    pub fn remove_offer(&self, offer_id: &str) -> AppResult<()> {
        let mut inner = self.inner.write();
        let before = inner.offers.len();
        inner.offers.retain(|o| o.id != offer_id);
        if inner.offers.len() == before {
            return Err(AppError::not_found(format!("Offer {} not found", offer_id)));
        }
        info!(offer_id, "offer removed");
        Ok(())
    }
}
