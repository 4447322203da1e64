//! TableHub Core - restaurant discovery and booking domain
//!
//! In-memory domain library behind the TableHub demo: restaurants, offers,
//! table bookings, offer redemptions, and the derived statistics an admin
//! dashboard renders. No persistence, no network surface, no auth; a
//! presentation layer calls in and renders what comes back.
//!
//! # Module structure
//!
//! ```text
//! tablehub-core/src/
//! ├── models/       # Restaurant, Offer, Booking, RedeemedOffer
//! ├── store/        # CatalogStore, BookingLedger, RedemptionLedger
//! ├── statistics.rs # pure aggregation over store snapshots
//! ├── state.rs      # SessionState bundling the stores
//! ├── seed.rs       # canonical demo dataset
//! └── utils/        # ids, dates, input validation
//! ```
//!
//! # Example
//!
//! ```
//! use tablehub_core::{BookingRequest, SessionState};
//! use tablehub_core::utils::parse_date;
//!
//! let session = SessionState::with_seed_data();
//! let booking = session.create_booking(BookingRequest {
//!     restaurant_id: "1".to_string(),
//!     date: parse_date("2025-01-05").unwrap(),
//!     time: "7:00 PM".to_string(),
//!     guests: 4,
//! }).unwrap();
//!
//! assert_eq!(booking.total_price, rust_decimal::Decimal::from(100));
//! ```

pub mod error;
pub mod models;
pub mod seed;
pub mod state;
pub mod statistics;
pub mod store;
pub mod utils;

// Re-export public types
pub use error::{AppError, AppResult};
pub use models::{Booking, BookingRequest, Offer, OfferCreate, RedeemedOffer, Restaurant};
pub use state::SessionState;
pub use statistics::{OfferShare, OverviewStats, RestaurantBookings, RestaurantPerformance};
pub use store::{BookingLedger, CatalogStore, RedemptionLedger};
