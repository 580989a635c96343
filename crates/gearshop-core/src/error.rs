//! Storefront error types.
//!
//! Store operations themselves are total; "no effect" is a valid silent
//! outcome, not an error. The variants here cover the boundaries only:
//! validating static data at catalog construction, parsing names from
//! the outside, and checked money arithmetic.

use crate::ids::{ProductId, ReviewId};
use crate::money::Currency;
use thiserror::Error;

/// Errors that can occur when assembling or querying the storefront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Catalog contains two products with the same id.
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// Review list contains two reviews with the same id.
    #[error("duplicate review id: {0}")]
    DuplicateReviewId(ReviewId),

    /// Product rating outside the 0..=5 range.
    #[error("invalid rating {rating} for product {id} (must be 0..=5)")]
    InvalidRating { id: ProductId, rating: u8 },

    /// Review rating outside the 0..=5 range.
    #[error("invalid rating {rating} for review {id} (must be 0..=5)")]
    InvalidReviewRating { id: ReviewId, rating: u8 },

    /// Unknown category name.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,
}
