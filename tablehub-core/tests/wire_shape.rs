//! Serialized shape of domain records: camelCase keys, numeric prices,
//! ISO dates. This is the contract the presentation layer consumes.

use serde_json::json;
use tablehub_core::utils::parse_date;
use tablehub_core::{BookingRequest, SessionState};

#[test]
fn booking_serializes_camel_case_with_numeric_total() {
    let session = SessionState::with_seed_data();
    let booking = session
        .create_booking(BookingRequest {
            restaurant_id: "3".to_string(),
            date: parse_date("2025-02-14").unwrap(),
            time: "8:30 PM".to_string(),
            guests: 2,
        })
        .unwrap();

    let value = serde_json::to_value(&booking).unwrap();
    assert_eq!(value["restaurantId"], json!("3"));
    assert_eq!(value["restaurantName"], json!("El Mariachi"));
    assert_eq!(value["date"], json!("2025-02-14"));
    assert_eq!(value["guests"], json!(2));
    assert_eq!(value["totalPrice"], json!(40.0));
}

#[test]
fn restaurant_serializes_seat_price_as_number() {
    let session = SessionState::with_seed_data();
    let value = serde_json::to_value(&session.catalog.restaurants()[0]).unwrap();
    assert_eq!(value["seatPrice"], serde_json::json!(25.0));
    assert!(value.get("seat_price").is_none());
}

#[test]
fn offer_serializes_valid_until_as_iso_date() {
    let session = SessionState::with_seed_data();
    let offer = session.catalog.offer("o1").unwrap();
    let value = serde_json::to_value(&offer).unwrap();
    assert_eq!(value["validUntil"], serde_json::json!("2025-01-05"));
    assert_eq!(value["restaurantId"], serde_json::json!("1"));
}
