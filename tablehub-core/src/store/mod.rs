//! Stores and Ledgers
//!
//! Each store owns exactly one entity collection behind a `parking_lot`
//! lock; there is no ambient global state. Callers hold the stores (usually
//! through [`crate::state::SessionState`]) and pass references where an
//! operation spans collections, e.g. booking creation reading the current
//! seat price from the catalog.
//!
//! - [`CatalogStore`]: restaurants and offers (price update, offer add/remove)
//! - [`BookingLedger`]: append-only confirmed bookings
//! - [`RedemptionLedger`]: append-only redemptions + redeemed-id set
//!
//! Reads hand out cloned snapshots. Check-then-act sequences (the redemption
//! "already redeemed?" check, the booking price read) run under a single
//! lock acquisition, so the stores stay correct if shared across threads.

mod bookings;
mod catalog;
mod redemptions;

pub use bookings::BookingLedger;
pub use catalog::CatalogStore;
pub use redemptions::RedemptionLedger;
