//! Unified Error Handling
//!
//! Provides the application-wide error type and result alias:
//! - [`AppError`] - domain error enum
//! - [`AppResult`] - result alias used across stores and statistics
//!
//! All errors are local, synchronous and recoverable. There is no fatal
//! category: every mutation is a single in-memory append or replace, so
//! nothing has partial-failure or rollback concerns. The presentation layer
//! owns user-facing messages; this crate only surfaces typed failures.
//!
//! # Example
//!
//! ```
//! use tablehub_core::{AppError, AppResult};
//!
//! fn lookup(id: &str) -> AppResult<()> {
//!     Err(AppError::not_found(format!("Restaurant {} not found", id)))
//! }
//!
//! assert!(matches!(lookup("x"), Err(AppError::NotFound(_))));
//! ```

/// Domain error enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    // ========== Business Logic Errors ==========
    /// Referenced restaurant or offer id does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Guest count out of range, negative price, missing required field
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Duplicate redemption attempt for an offer id
    #[error("Offer already redeemed: {0}")]
    AlreadyRedeemed(String),
}

impl AppError {
    /// Shorthand for [`AppError::NotFound`]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Shorthand for [`AppError::Validation`]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for [`AppError::AlreadyRedeemed`]
    pub fn already_redeemed(msg: impl Into<String>) -> Self {
        Self::AlreadyRedeemed(msg.into())
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;
