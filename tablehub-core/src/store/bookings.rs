//! Booking Ledger
//!
//! Append-only list of confirmed bookings. Records are never mutated or
//! deleted. No capacity or slot-uniqueness constraint exists: booking the
//! same restaurant, date and time twice is allowed.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Booking, BookingRequest};
use crate::store::CatalogStore;
use crate::utils::id::new_id;
use crate::utils::validation::validate_guest_count;

const BOOKING_ID_PREFIX: &str = "b";

/// Append-only ledger of confirmed bookings
#[derive(Default)]
pub struct BookingLedger {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the request, price it against the catalog's current seat
    /// price, and append an immutable booking record.
    ///
    /// `total_price = guests x seat price at booking time`. The total is
    /// denormalized into the record, so later price updates never change it.
    pub fn create_booking(
        &self,
        catalog: &CatalogStore,
        request: BookingRequest,
    ) -> AppResult<Booking> {
        validate_guest_count(request.guests)?;

        let restaurant = catalog.restaurant(&request.restaurant_id).ok_or_else(|| {
            AppError::not_found(format!("Restaurant {} not found", request.restaurant_id))
        })?;

        let booking = Booking {
            id: new_id(BOOKING_ID_PREFIX),
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name,
            date: request.date,
            time: request.time,
            guests: request.guests,
            total_price: Decimal::from(request.guests) * restaurant.seat_price,
        };
        self.bookings.write().push(booking.clone());
        info!(
            booking_id = %booking.id,
            restaurant_id = %booking.restaurant_id,
            guests = booking.guests,
            total = %booking.total_price,
            "booking created"
        );
        Ok(booking)
    }

    /// Snapshot of all bookings, insertion order.
    pub fn list_all(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }

    /// Bookings for one restaurant, insertion order.
    pub fn list_for(&self, restaurant_id: &str) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| b.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::utils::time::parse_date;

    fn seeded_catalog() -> CatalogStore {
        CatalogStore::new(seed::restaurants(), seed::offers())
    }

    fn request(restaurant_id: &str, date: &str, guests: i32) -> BookingRequest {
        BookingRequest {
            restaurant_id: restaurant_id.to_string(),
            date: parse_date(date).unwrap(),
            time: "7:00 PM".to_string(),
            guests,
        }
    }

    #[test]
    fn total_price_is_guests_times_seat_price() {
        let catalog = seeded_catalog();
        let ledger = BookingLedger::new();

        // Seeded La Bella Italia has seat price 25
        let booking = ledger
            .create_booking(&catalog, request("1", "2025-01-05", 4))
            .unwrap();
        assert_eq!(booking.total_price, Decimal::from(100));
        assert_eq!(booking.restaurant_name, "La Bella Italia");
    }

    #[test]
    fn price_update_does_not_rewrite_past_bookings() {
        let catalog = seeded_catalog();
        let ledger = BookingLedger::new();

        let first = ledger
            .create_booking(&catalog, request("1", "2025-01-05", 4))
            .unwrap();
        assert_eq!(first.total_price, Decimal::from(100));

        catalog.update_seat_price("1", Decimal::from(30)).unwrap();

        let second = ledger
            .create_booking(&catalog, request("1", "2025-01-06", 2))
            .unwrap();
        assert_eq!(second.total_price, Decimal::from(60));

        // The earlier record still carries the old total
        let all = ledger.list_all();
        assert_eq!(all[0].total_price, Decimal::from(100));
    }

    #[test]
    fn zero_guests_rejected() {
        let catalog = seeded_catalog();
        let ledger = BookingLedger::new();
        let err = ledger
            .create_booking(&catalog, request("1", "2025-01-05", 0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(ledger.list_all().is_empty());
    }

    #[test]
    fn unknown_restaurant_rejected() {
        let catalog = seeded_catalog();
        let ledger = BookingLedger::new();
        let err = ledger
            .create_booking(&catalog, request("999", "2025-01-05", 2))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn double_booking_the_same_slot_is_permitted() {
        let catalog = seeded_catalog();
        let ledger = BookingLedger::new();

        ledger
            .create_booking(&catalog, request("2", "2025-01-10", 2))
            .unwrap();
        ledger
            .create_booking(&catalog, request("2", "2025-01-10", 2))
            .unwrap();

        assert_eq!(ledger.list_for("2").len(), 2);
    }
}
