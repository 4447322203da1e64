//! Domain Models
//!
//! Plain value records for the booking domain. Instances are immutable once
//! created; the only field ever replaced in place is a restaurant's seat
//! price (admin action, via [`crate::store::CatalogStore`]).
//!
//! All records serialize camelCase (`restaurantId`, `seatPrice`, ...).

mod booking;
mod offer;
mod redemption;
mod restaurant;

pub use booking::{Booking, BookingRequest};
pub use offer::{Offer, OfferCreate};
pub use redemption::RedeemedOffer;
pub use restaurant::Restaurant;
