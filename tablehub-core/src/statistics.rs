//! Statistics Aggregator
//!
//! Pure, stateless functions deriving admin-dashboard metrics from store
//! snapshots. Nothing here is cached or incrementally maintained: callers
//! snapshot the stores and recompute on demand, so repeated calls with no
//! intervening mutation return identical results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, Offer, RedeemedOffer, Restaurant};

// ============================================================================
// Report Types
// ============================================================================

/// Dashboard overview counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_restaurants: usize,
    pub total_bookings: usize,
    pub total_offers: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub total_guests: i64,
}

/// Booking count and revenue for one restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantBookings {
    pub restaurant_id: String,
    pub name: String,
    pub bookings: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

/// Offer count for one restaurant (distribution chart slice)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferShare {
    pub restaurant_id: String,
    pub name: String,
    pub offers: usize,
}

/// Per-restaurant performance row: a join across all three stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPerformance {
    pub restaurant_id: String,
    pub name: String,
    pub bookings: usize,
    pub offers: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub seat_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
}

// ============================================================================
// Aggregation Functions
// ============================================================================

/// Sum of all booking totals.
pub fn total_revenue(bookings: &[Booking]) -> Decimal {
    bookings.iter().map(|b| b.total_price).sum()
}

/// Sum of all booked guests.
pub fn total_guests(bookings: &[Booking]) -> i64 {
    bookings.iter().map(|b| i64::from(b.guests)).sum()
}

/// Dashboard stat cards: entity counts plus revenue and guest totals.
pub fn overview(
    restaurants: &[Restaurant],
    offers: &[Offer],
    bookings: &[Booking],
) -> OverviewStats {
    OverviewStats {
        total_restaurants: restaurants.len(),
        total_bookings: bookings.len(),
        total_offers: offers.len(),
        total_revenue: total_revenue(bookings),
        total_guests: total_guests(bookings),
    }
}

fn revenue_for(restaurant_id: &str, bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| b.restaurant_id == restaurant_id)
        .map(|b| b.total_price)
        .sum()
}

/// Booking count and summed revenue per restaurant.
///
/// Every restaurant appears, zero-valued entries included, in catalog order.
pub fn bookings_by_restaurant(
    restaurants: &[Restaurant],
    bookings: &[Booking],
) -> Vec<RestaurantBookings> {
    restaurants
        .iter()
        .map(|r| RestaurantBookings {
            restaurant_id: r.id.clone(),
            name: r.name.clone(),
            bookings: bookings.iter().filter(|b| b.restaurant_id == r.id).count(),
            revenue: revenue_for(&r.id, bookings),
        })
        .collect()
}

/// Offer count per restaurant; restaurants with zero offers are excluded.
pub fn offer_distribution(restaurants: &[Restaurant], offers: &[Offer]) -> Vec<OfferShare> {
    restaurants
        .iter()
        .map(|r| OfferShare {
            restaurant_id: r.id.clone(),
            name: r.name.clone(),
            offers: offers.iter().filter(|o| o.restaurant_id == r.id).count(),
        })
        .filter(|share| share.offers > 0)
        .collect()
}

/// The `n` most recently dated bookings, descending by calendar date.
///
/// Ties keep insertion order (stable sort). Dates compare as `NaiveDate`,
/// never as strings, so ordering is correct across month and year
/// boundaries.
pub fn recent_bookings(bookings: &[Booking], n: usize) -> Vec<Booking> {
    let mut sorted: Vec<Booking> = bookings.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

/// The last `n` redemption records, most recent first.
pub fn recent_redemptions(redemptions: &[RedeemedOffer], n: usize) -> Vec<RedeemedOffer> {
    redemptions.iter().rev().take(n).cloned().collect()
}

/// Per-restaurant performance table joining catalog, bookings and offers.
pub fn restaurant_performance(
    restaurants: &[Restaurant],
    offers: &[Offer],
    bookings: &[Booking],
) -> Vec<RestaurantPerformance> {
    restaurants
        .iter()
        .map(|r| RestaurantPerformance {
            restaurant_id: r.id.clone(),
            name: r.name.clone(),
            bookings: bookings.iter().filter(|b| b.restaurant_id == r.id).count(),
            offers: offers.iter().filter(|o| o.restaurant_id == r.id).count(),
            seat_price: r.seat_price,
            revenue: revenue_for(&r.id, bookings),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::NaiveDate;

    fn make_booking(restaurant_id: &str, date: (i32, u32, u32), guests: i32, total: i64) -> Booking {
        Booking {
            id: format!("b-{}-{}", restaurant_id, total),
            restaurant_id: restaurant_id.to_string(),
            restaurant_name: format!("Restaurant {}", restaurant_id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: "7:00 PM".to_string(),
            guests,
            total_price: Decimal::from(total),
        }
    }

    fn make_redemption(id: &str, title: &str) -> RedeemedOffer {
        RedeemedOffer {
            id: id.to_string(),
            restaurant_name: "La Bella Italia".to_string(),
            offer_title: title.to_string(),
            discount: "20% OFF".to_string(),
            redeemed_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn revenue_and_guests_sum_over_all_bookings() {
        let bookings = vec![
            make_booking("1", (2025, 1, 5), 4, 100),
            make_booking("2", (2025, 1, 6), 2, 70),
        ];
        assert_eq!(total_revenue(&bookings), Decimal::from(170));
        assert_eq!(total_guests(&bookings), 6);

        // Recomputing with no intervening mutation is idempotent
        assert_eq!(total_revenue(&bookings), total_revenue(&bookings));
    }

    #[test]
    fn empty_ledger_sums_to_zero() {
        assert_eq!(total_revenue(&[]), Decimal::ZERO);
        assert_eq!(total_guests(&[]), 0);
    }

    #[test]
    fn bookings_by_restaurant_includes_zero_entries() {
        let restaurants = seed::restaurants();
        let bookings = vec![
            make_booking("1", (2025, 1, 5), 4, 100),
            make_booking("1", (2025, 1, 6), 2, 50),
        ];

        let stats = bookings_by_restaurant(&restaurants, &bookings);
        assert_eq!(stats.len(), restaurants.len());
        assert_eq!(stats[0].bookings, 2);
        assert_eq!(stats[0].revenue, Decimal::from(150));
        assert_eq!(stats[1].bookings, 0);
        assert_eq!(stats[1].revenue, Decimal::ZERO);
    }

    #[test]
    fn offer_distribution_excludes_zero_offer_restaurants() {
        let restaurants = seed::restaurants();
        // Only restaurant 1 keeps its offers
        let offers: Vec<Offer> = seed::offers()
            .into_iter()
            .filter(|o| o.restaurant_id == "1")
            .collect();

        let shares = offer_distribution(&restaurants, &offers);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].restaurant_id, "1");
        assert_eq!(shares[0].offers, 2);
        assert!(shares.iter().all(|s| s.offers > 0));
    }

    #[test]
    fn recent_bookings_orders_by_calendar_date_not_string() {
        // Lexicographic comparison would put "2024-12-31" after "2024-02-01"
        // but before "2025-01-02"; calendar order is what matters.
        let bookings = vec![
            make_booking("1", (2024, 12, 31), 2, 50),
            make_booking("2", (2025, 1, 2), 2, 70),
            make_booking("3", (2024, 2, 1), 2, 40),
        ];

        let recent = recent_bookings(&bookings, 5);
        assert_eq!(recent.len(), 3);
        let dates: Vec<NaiveDate> = recent.iter().map(|b| b.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn recent_bookings_ties_keep_insertion_order() {
        let mut first = make_booking("1", (2025, 1, 5), 2, 50);
        first.id = "b-first".to_string();
        let mut second = make_booking("2", (2025, 1, 5), 2, 70);
        second.id = "b-second".to_string();

        let recent = recent_bookings(&[first, second], 2);
        assert_eq!(recent[0].id, "b-first");
        assert_eq!(recent[1].id, "b-second");
    }

    #[test]
    fn recent_bookings_truncates_to_n() {
        let bookings: Vec<Booking> = (1..=10)
            .map(|d| make_booking("1", (2025, 1, d), 2, 50))
            .collect();
        assert_eq!(recent_bookings(&bookings, 5).len(), 5);
    }

    #[test]
    fn recent_redemptions_returns_last_n_reversed() {
        let redemptions = vec![
            make_redemption("r1", "first"),
            make_redemption("r2", "second"),
            make_redemption("r3", "third"),
        ];

        let recent = recent_redemptions(&redemptions, 2);
        let titles: Vec<&str> = recent.iter().map(|r| r.offer_title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second"]);
    }

    #[test]
    fn performance_joins_all_three_stores() {
        let restaurants = seed::restaurants();
        let offers = seed::offers();
        let bookings = vec![
            make_booking("1", (2025, 1, 5), 4, 100),
            make_booking("4", (2025, 1, 6), 2, 80),
        ];

        let rows = restaurant_performance(&restaurants, &offers, &bookings);
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].name, "La Bella Italia");
        assert_eq!(rows[0].bookings, 1);
        assert_eq!(rows[0].offers, 2);
        assert_eq!(rows[0].seat_price, Decimal::from(25));
        assert_eq!(rows[0].revenue, Decimal::from(100));

        // Restaurant with no bookings still appears with zeros
        assert_eq!(rows[1].bookings, 0);
        assert_eq!(rows[1].revenue, Decimal::ZERO);
    }

    #[test]
    fn overview_counts_match_inputs() {
        let restaurants = seed::restaurants();
        let offers = seed::offers();
        let bookings = vec![make_booking("1", (2025, 1, 5), 4, 100)];

        let stats = overview(&restaurants, &offers, &bookings);
        assert_eq!(stats.total_restaurants, 4);
        assert_eq!(stats.total_offers, 5);
        assert_eq!(stats.total_bookings, 1);
        assert_eq!(stats.total_revenue, Decimal::from(100));
        assert_eq!(stats.total_guests, 4);
    }
}
