//! Coupon Data

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use butik::coupons::{DiscountType, rules};

use crate::domain::coupons::{errors::NewCouponError, records::CouponId};

/// New Coupon Data
///
/// The administrative create payload. A new coupon always starts unused and
/// active; `times_used` and the audit timestamps are assigned at persistence
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCoupon {
    pub id: CouponId,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub minimum_order_value: Decimal,
    pub expiry_date: Option<Date>,
    pub usage_limit: i32,
}

impl NewCoupon {
    /// Run the create-time rule checks, reporting the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns the [`NewCouponError`] for the first failing check: code
    /// length, minimum order value, discount value, expiry date, usage
    /// limit, then percentage bounds for percentage coupons.
    pub fn validate(&self) -> Result<(), NewCouponError> {
        if !rules::has_valid_coupon_code_length(Some(&self.code)) {
            return Err(NewCouponError::CodeLength);
        }

        if !rules::minimum_order_value_is_positive(Some(self.minimum_order_value)) {
            return Err(NewCouponError::MinimumOrderValue);
        }

        if !rules::discount_value_is_positive(Some(self.discount_value)) {
            return Err(NewCouponError::DiscountValue);
        }

        if !rules::is_expiry_date_valid(self.expiry_date) {
            return Err(NewCouponError::ExpiryDate);
        }

        if !rules::can_be_used(self.usage_limit, 0) {
            return Err(NewCouponError::UsageLimit);
        }

        if self.discount_type == DiscountType::Percentage
            && !rules::is_valid_percentage(Some(self.discount_value))
        {
            return Err(NewCouponError::Percentage);
        }

        Ok(())
    }
}
