//! Coupons Repository

use mockall::automock;

use crate::domain::coupons::{errors::StorageError, records::CouponRecord};

/// Lookup capability the storage adapters implement.
///
/// A single point read by code. Adapters return soft-deleted coupons as
/// stored; the deleted check belongs to the validation flow so that every
/// backend reports the same rejection reason.
#[automock]
pub trait CouponsRepository: Send + Sync {
    /// Find a coupon by its human-entered code.
    fn find_by_code(&self, code: &str) -> Result<Option<CouponRecord>, StorageError>;
}
