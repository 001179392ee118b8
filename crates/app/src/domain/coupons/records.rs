//! Coupon Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use butik::coupons::{DiscountType, rules};

/// Coupon identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CouponId(Uuid);

impl CouponId {
    /// Mint a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for CouponId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CouponId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for CouponId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl From<CouponId> for Uuid {
    fn from(value: CouponId) -> Self {
        value.into_uuid()
    }
}

/// Coupon Record
///
/// A stored coupon exactly as the lookup capability returns it. Eligibility
/// is decided by the validation service, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponRecord {
    pub id: CouponId,

    /// Human-entered lookup code, unique per store.
    pub code: String,

    pub discount_type: DiscountType,

    /// Percentage in `(0, 100]` or a fixed currency amount, depending on
    /// `discount_type`.
    pub discount_value: Decimal,

    /// Subtotal threshold the order must reach; zero means no minimum.
    pub minimum_order_value: Decimal,

    /// Last calendar day the coupon is valid, inclusive.
    pub expiry_date: Option<Date>,

    pub usage_limit: i32,

    /// Applications so far; incremented by the order-completion flow.
    pub times_used: i32,

    /// Admin kill switch, independent of expiry and usage state.
    pub is_active: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Set when the coupon is soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

impl CouponRecord {
    /// Whether the coupon has been soft-deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Uses left before the coupon hits its usage limit.
    #[must_use]
    pub fn remaining_uses(&self) -> i32 {
        rules::remaining_uses(self.usage_limit, self.times_used)
    }
}
