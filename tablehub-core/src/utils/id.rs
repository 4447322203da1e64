//! Id generation
//!
//! Ids are opaque strings: a short entity prefix plus a random UUID.
//! The prefix (`o-` offers, `b-` bookings, `r-` redemptions) keeps ids
//! recognizable in logs; the UUID makes them collision-resistant even
//! under rapid successive calls, which a timestamp-based scheme is not.

use uuid::Uuid;

/// Generate a fresh unique id with the given entity prefix.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}
