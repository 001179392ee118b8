//! Discount calculation
//!
//! Turns a validated coupon's discount configuration and an order subtotal
//! into the amount taken off the order. The rules here assume their inputs
//! already passed the checks in [`crate::coupons::rules`]; nothing is
//! re-validated.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::coupons::DiscountType;

/// Decimal places used for monetary amounts.
const MONEY_SCALE: u32 = 2;

/// Calculate the discount a coupon takes off the given order subtotal.
///
/// Percentage discounts are rounded half-up to two decimal places; fixed
/// amounts are used as-is. Either way the result is capped at the subtotal,
/// so an order total can never go negative.
#[must_use]
pub fn calculate(
    discount_type: DiscountType,
    discount_value: Decimal,
    order_subtotal: Decimal,
) -> Decimal {
    let discount = match discount_type {
        DiscountType::Percentage => percentage_of(order_subtotal, discount_value),
        DiscountType::FixedAmount => discount_value,
    };

    discount.min(order_subtotal)
}

/// `percentage` percent of `amount`, rounded half-up to two decimal places.
#[must_use]
pub fn percentage_of(amount: Decimal, percentage: Decimal) -> Decimal {
    (amount * percentage / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_of_two_hundred_and_fifty() {
        let discount = calculate(
            DiscountType::Percentage,
            Decimal::from(10),
            Decimal::new(25_000, 2),
        );

        assert_eq!(discount, Decimal::new(2_500, 2));
    }

    #[test]
    fn percentage_discount_rounds_half_up() {
        // 10% of 100.05 is 10.005, which rounds up to 10.01.
        let discount = calculate(
            DiscountType::Percentage,
            Decimal::from(10),
            Decimal::new(10_005, 2),
        );

        assert_eq!(discount, Decimal::new(1_001, 2));
    }

    #[test]
    fn full_percentage_discount_matches_the_subtotal() {
        let subtotal = Decimal::new(19_999, 2);
        let discount = calculate(DiscountType::Percentage, Decimal::from(100), subtotal);

        assert_eq!(discount, subtotal);
    }

    #[test]
    fn fixed_amount_passes_through_unrounded() {
        let discount = calculate(
            DiscountType::FixedAmount,
            Decimal::new(12_345, 3),
            Decimal::from(500),
        );

        assert_eq!(discount, Decimal::new(12_345, 3));
    }

    #[test]
    fn fixed_amount_is_capped_at_the_subtotal() {
        let discount = calculate(
            DiscountType::FixedAmount,
            Decimal::from(500),
            Decimal::from(100),
        );

        assert_eq!(discount, Decimal::from(100));
    }

    #[test]
    fn zero_subtotal_yields_zero_discount() {
        let discount = calculate(DiscountType::FixedAmount, Decimal::from(20), Decimal::ZERO);

        assert_eq!(discount, Decimal::ZERO);
    }

    #[test]
    fn percentage_of_rounds_midpoints_away_from_zero() {
        assert_eq!(
            percentage_of(Decimal::new(12_350, 2), Decimal::from(10)),
            Decimal::new(1_235, 2)
        );
        assert_eq!(
            percentage_of(Decimal::new(1_250, 2), Decimal::from(25)),
            Decimal::new(313, 2)
        );
    }
}
