//! Coupon Validation Service

use rust_decimal::Decimal;
use tracing::info;

use butik::{coupons::rules, discounts};

use crate::domain::coupons::{
    errors::CouponValidationError, records::CouponRecord, repository::CouponsRepository,
};

/// Validates coupons against an order and computes the resulting discount.
///
/// The service holds no state beyond the injected lookup capability; every
/// call is an independent read-and-check and never writes. In particular
/// `times_used` is not incremented here: the order-completion flow does that
/// later, gated by [`rules::can_be_used_counting_next_use`].
#[derive(Debug, Clone)]
pub struct CouponValidationService<R> {
    repository: R,
}

impl<R: CouponsRepository> CouponValidationService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate a coupon code against an order subtotal.
    ///
    /// The checks run in a fixed order and the first failure determines the
    /// reported reason: lookup, active flag, soft deletion, expiry, usage
    /// limit, minimum order value. On success the coupon is returned
    /// unchanged and is fully eligible for an order of exactly this subtotal
    /// at this instant.
    ///
    /// # Errors
    ///
    /// Returns the [`CouponValidationError`] for the first failing check, or
    /// a storage error if the lookup itself failed.
    #[tracing::instrument(name = "coupons.service.validate_coupon", skip(self), err)]
    pub fn validate_coupon(
        &self,
        coupon_code: &str,
        order_subtotal: Decimal,
    ) -> Result<CouponRecord, CouponValidationError> {
        let coupon = self
            .repository
            .find_by_code(coupon_code)?
            .ok_or_else(|| CouponValidationError::NotFound {
                code: coupon_code.to_string(),
            })?;

        if !coupon.is_active {
            return Err(CouponValidationError::Inactive);
        }

        if coupon.is_deleted() {
            return Err(CouponValidationError::Deleted);
        }

        if coupon.expiry_date.is_some() && !rules::is_expiry_date_valid(coupon.expiry_date) {
            return Err(CouponValidationError::Expired);
        }

        if coupon.times_used >= coupon.usage_limit {
            return Err(CouponValidationError::UsageLimitExceeded);
        }

        if order_subtotal < coupon.minimum_order_value {
            return Err(CouponValidationError::BelowMinimumOrderValue {
                subtotal: order_subtotal,
                minimum: coupon.minimum_order_value,
            });
        }

        info!(coupon_id = %coupon.id, code = %coupon.code, "validated coupon");

        Ok(coupon)
    }

    /// Discount the coupon takes off the given subtotal.
    ///
    /// Assumes the coupon already passed [`Self::validate_coupon`]; no
    /// business rules are re-checked. The result is always within
    /// `[0, order_subtotal]`.
    #[must_use]
    pub fn calculate_discount(&self, coupon: &CouponRecord, order_subtotal: Decimal) -> Decimal {
        discounts::calculate(coupon.discount_type, coupon.discount_value, order_subtotal)
    }
}
