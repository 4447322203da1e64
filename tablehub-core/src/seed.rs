//! Demo seed data
//!
//! The canonical four-restaurant, five-offer dataset the demo ships with.
//! The presentation layer owns seeding; this module just provides the
//! dataset so every frontend and test harness starts from the same state.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Offer, Restaurant};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are compile-time constants, always valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// The four seeded restaurants.
pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: "1".to_string(),
            name: "La Bella Italia".to_string(),
            cuisine: "Italian Cuisine".to_string(),
            location: "Downtown, 123 Main St".to_string(),
            image: "https://images.unsplash.com/photo-1672636401339-88d7b84cb1df?w=1080&q=80"
                .to_string(),
            description: "Experience authentic Italian flavors in a cozy, elegant atmosphere. \
                          Our chefs bring traditional recipes from Italy with locally sourced \
                          ingredients."
                .to_string(),
            seat_price: Decimal::from(25),
        },
        Restaurant {
            id: "2".to_string(),
            name: "Tokyo Sushi Bar".to_string(),
            cuisine: "Japanese Cuisine".to_string(),
            location: "Midtown, 456 Oak Ave".to_string(),
            image: "https://images.unsplash.com/photo-1621871908119-295c8ce5cee4?w=1080&q=80"
                .to_string(),
            description: "Fresh sushi and sashimi prepared by master chefs. Enjoy the finest \
                          Japanese dining experience with our omakase menu."
                .to_string(),
            seat_price: Decimal::from(35),
        },
        Restaurant {
            id: "3".to_string(),
            name: "El Mariachi".to_string(),
            cuisine: "Mexican Cuisine".to_string(),
            location: "Westside, 789 Pine Rd".to_string(),
            image: "https://images.unsplash.com/photo-1665541620643-38a95ca78e6c?w=1080&q=80"
                .to_string(),
            description: "Vibrant Mexican restaurant serving traditional dishes with a modern \
                          twist. Live mariachi music on weekends!"
                .to_string(),
            seat_price: Decimal::from(20),
        },
        Restaurant {
            id: "4".to_string(),
            name: "The Grand Bistro".to_string(),
            cuisine: "French Cuisine".to_string(),
            location: "Uptown, 321 Elm St".to_string(),
            image: "https://images.unsplash.com/photo-1751563820356-a62570b187ea?w=1080&q=80"
                .to_string(),
            description: "Classic French bistro with an extensive wine collection. Perfect for \
                          romantic dinners and special occasions."
                .to_string(),
            seat_price: Decimal::from(40),
        },
    ]
}

/// The five seeded offers.
pub fn offers() -> Vec<Offer> {
    vec![
        Offer {
            id: "o1".to_string(),
            restaurant_id: "1".to_string(),
            title: "Weekend Special".to_string(),
            description: "Get 20% off on all pasta dishes this weekend!".to_string(),
            discount: "20% OFF".to_string(),
            valid_until: date(2025, 1, 5),
        },
        Offer {
            id: "o2".to_string(),
            restaurant_id: "1".to_string(),
            title: "Happy Hour".to_string(),
            description: "Buy one get one free on selected appetizers from 4-6 PM".to_string(),
            discount: "BOGO".to_string(),
            valid_until: date(2025, 1, 31),
        },
        Offer {
            id: "o3".to_string(),
            restaurant_id: "2".to_string(),
            title: "Sushi Combo Deal".to_string(),
            description: "Special combo platter with 30% discount".to_string(),
            discount: "30% OFF".to_string(),
            valid_until: date(2025, 1, 10),
        },
        Offer {
            id: "o4".to_string(),
            restaurant_id: "3".to_string(),
            title: "Taco Tuesday".to_string(),
            description: "All tacos at half price every Tuesday!".to_string(),
            discount: "50% OFF".to_string(),
            valid_until: date(2025, 2, 28),
        },
        Offer {
            id: "o5".to_string(),
            restaurant_id: "4".to_string(),
            title: "Wine & Dine".to_string(),
            description: "Complimentary wine with any main course".to_string(),
            discount: "Free Wine".to_string(),
            valid_until: date(2025, 1, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_offer_references_a_seed_restaurant() {
        let restaurant_ids: Vec<String> = restaurants().into_iter().map(|r| r.id).collect();
        for offer in offers() {
            assert!(
                restaurant_ids.contains(&offer.restaurant_id),
                "offer {} references unknown restaurant {}",
                offer.id,
                offer.restaurant_id
            );
        }
    }
}
