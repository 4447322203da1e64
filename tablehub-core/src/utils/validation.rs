//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are reasonable UX bounds for names, labels and descriptions;
//! nothing downstream enforces length on its own.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names and offer titles
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Discount labels ("20% OFF", "BOGO", "Free Wine")
pub const MAX_LABEL_LEN: usize = 50;

/// Largest party a single booking may hold
pub const MAX_GUESTS: i32 = 20;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a string is within the length limit (empty allowed).
pub fn validate_text_length(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    validate_text_length(value, field, max_len)
}

/// Validate a guest count: at least 1, at most [`MAX_GUESTS`].
pub fn validate_guest_count(guests: i32) -> AppResult<()> {
    if guests < 1 {
        return Err(AppError::validation(format!(
            "guests must be at least 1, got {}",
            guests
        )));
    }
    if guests > MAX_GUESTS {
        return Err(AppError::validation(format!(
            "guests exceeds maximum allowed ({}), got {}",
            MAX_GUESTS, guests
        )));
    }
    Ok(())
}

/// Validate a seat price: non-negative.
pub fn validate_seat_price(price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "seat price must be non-negative, got {}",
            price
        )));
    }
    Ok(())
}
