//! Coupon service errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failure reported by the storage adapter backing the coupon lookup.
#[derive(Debug, Error)]
#[error("storage error")]
pub struct StorageError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

/// Reasons a coupon is rejected at application time.
///
/// One variant per rule check, reported in the order the validation service
/// runs them; the first failing check wins.
#[derive(Debug, Error)]
pub enum CouponValidationError {
    #[error("invalid coupon code: {code}")]
    NotFound { code: String },

    #[error("coupon is not active")]
    Inactive,

    #[error("coupon has been deleted")]
    Deleted,

    #[error("coupon has expired")]
    Expired,

    #[error("coupon usage limit exceeded")]
    UsageLimitExceeded,

    #[error("order subtotal ({subtotal}) is below minimum required ({minimum})")]
    BelowMinimumOrderValue { subtotal: Decimal, minimum: Decimal },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Rule violations rejecting an administrative coupon create.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NewCouponError {
    #[error("coupon code must be between 3 and 20 characters long")]
    CodeLength,

    #[error("minimum order value cannot be negative")]
    MinimumOrderValue,

    #[error("discount value must be greater than 0")]
    DiscountValue,

    #[error("expiry date must be today or later")]
    ExpiryDate,

    #[error("usage limit must be greater than 0")]
    UsageLimit,

    #[error("percentage discount must be greater than 0 and at most 100")]
    Percentage,
}
