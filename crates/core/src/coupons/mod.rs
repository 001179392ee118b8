//! Coupons
//!
//! Coupon value types and the rule checks a coupon must pass before it may
//! be applied to an order.

pub mod rules;

use serde::{Deserialize, Serialize};

/// How a coupon's discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// A percentage of the order subtotal, in `(0, 100]`.
    Percentage,

    /// A fixed currency amount, already scaled to two decimal places.
    FixedAmount,
}

impl DiscountType {
    /// Storage tag for this discount type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::FixedAmount => "fixed_amount",
        }
    }
}
