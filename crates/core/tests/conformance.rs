//! Business-rule conformance tests
//!
//! End-to-end checks over the documented coupon properties: usage counting,
//! inclusive date windows, percentage bounds, and discount arithmetic.

use butik::coupons::DiscountType;
use butik::coupons::rules;
use butik::discounts;
use jiff::Zoned;
use jiff::civil::date;
use rust_decimal::Decimal;
use testresult::TestResult;

#[test]
fn usage_gates_and_remaining_uses_agree() {
    assert!(rules::can_be_used(50, 49));
    assert!(!rules::can_be_used(50, 50));

    assert_eq!(rules::remaining_uses(50, 50), 0);
    assert_eq!(rules::remaining_uses(50, 49), 1);
    assert_eq!(rules::remaining_uses(0, 0), 0);
    assert_eq!(rules::remaining_uses(50, -1), 0);

    // The pre-check and the pre-increment gate are interchangeable on the
    // valid domain.
    for used in 0..=55 {
        assert_eq!(
            rules::can_be_used(50, used),
            rules::can_be_used_counting_next_use(50, used),
            "gates disagree at {used}"
        );
    }
}

#[test]
fn validity_windows_are_inclusive() {
    let start = date(2024, 1, 1);
    let expiry = date(2024, 12, 31);

    assert!(rules::is_valid_on_date(Some(start), Some(expiry), Some(start)));
    assert!(rules::is_valid_on_date(Some(start), Some(expiry), Some(expiry)));
    assert!(!rules::is_valid_on_date(
        Some(start),
        Some(expiry),
        Some(date(2023, 12, 31))
    ));
}

#[test]
fn percentage_bounds_are_half_open() {
    assert!(!rules::is_valid_percentage(Some(Decimal::ZERO)));
    assert!(rules::is_valid_percentage(Some(Decimal::from(100))));
    assert!(!rules::is_valid_percentage(Some(Decimal::new(10_001, 2))));
}

#[test]
fn a_freshly_minted_coupon_passes_every_creation_rule() -> TestResult {
    let expiry = Zoned::now().date().tomorrow()?;

    assert!(rules::has_valid_coupon_code_length(Some("WINTER25")));
    assert!(rules::is_valid_discount_type(Some(DiscountType::Percentage)));
    assert!(rules::discount_value_is_positive(Some(Decimal::from(25))));
    assert!(rules::minimum_order_value_is_positive(Some(Decimal::from(
        100
    ))));
    assert!(rules::is_expiry_date_valid(Some(expiry)));
    assert!(rules::can_be_used(100, 10));
    assert_eq!(rules::remaining_uses(100, 10), 90);

    Ok(())
}

#[test]
fn discount_arithmetic_matches_the_documented_examples() {
    // 10% of 250.00 rounds to exactly 25.00.
    assert_eq!(
        discounts::calculate(
            DiscountType::Percentage,
            Decimal::from(10),
            Decimal::new(25_000, 2)
        ),
        Decimal::new(2_500, 2)
    );

    // A 500.00 fixed discount on a 100.00 order is capped at the subtotal.
    assert_eq!(
        discounts::calculate(
            DiscountType::FixedAmount,
            Decimal::new(50_000, 2),
            Decimal::new(10_000, 2)
        ),
        Decimal::new(10_000, 2)
    );
}
