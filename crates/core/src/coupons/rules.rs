//! Coupon rule checks
//!
//! Independent, side-effect-free predicates over coupon fields. Each check
//! takes plain values, with `Option` standing in for data that may be
//! missing, and returns a boolean; a missing value is simply invalid, never
//! an error. Callers translate a failed check into their own error type.

use jiff::Zoned;
use jiff::civil::{Date, DateTime};
use rust_decimal::Decimal;

use crate::coupons::DiscountType;

/// Canonical string length of a UUID, e.g.
/// `550e8400-e29b-41d4-a716-446655440000`.
const ID_LENGTH: usize = 36;

/// Shortest accepted coupon code.
const CODE_MIN_LENGTH: usize = 3;

/// Longest accepted coupon code.
const CODE_MAX_LENGTH: usize = 20;

/// Upper bound for a percentage discount.
const PERCENTAGE_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Whether an externally supplied identifier is non-blank and has the
/// canonical UUID string length.
#[must_use]
pub fn has_valid_id_length(id: Option<&str>) -> bool {
    id.is_some_and(|id| !id.trim().is_empty() && id.len() == ID_LENGTH)
}

/// Whether a coupon code is non-blank and within the accepted length range.
#[must_use]
pub fn has_valid_coupon_code_length(code: Option<&str>) -> bool {
    code.is_some_and(|code| {
        !code.trim().is_empty() && (CODE_MIN_LENGTH..=CODE_MAX_LENGTH).contains(&code.len())
    })
}

/// Whether a discount type is present. The two-value enum makes any present
/// type valid by construction.
#[must_use]
pub fn is_valid_discount_type(discount_type: Option<DiscountType>) -> bool {
    discount_type.is_some()
}

/// Whether a discount value is present and strictly positive.
#[must_use]
pub fn discount_value_is_positive(value: Option<Decimal>) -> bool {
    value.is_some_and(|value| value > Decimal::ZERO)
}

/// Whether a minimum order value is present and not negative. Zero is
/// allowed and means "no minimum".
#[must_use]
pub fn minimum_order_value_is_positive(value: Option<Decimal>) -> bool {
    value.is_some_and(|value| value >= Decimal::ZERO)
}

/// Whether an expiry date is present and has not passed. A coupon expiring
/// today is valid through the end of the day.
#[must_use]
pub fn is_expiry_date_valid(expiry_date: Option<Date>) -> bool {
    expiry_date.is_some_and(|expiry| expiry >= today())
}

/// Whether `check_date` falls within `[start_date, expiry_date]`, inclusive
/// on both ends. A missing date makes the range invalid rather than an
/// error.
#[must_use]
pub fn is_valid_on_date(
    start_date: Option<Date>,
    expiry_date: Option<Date>,
    check_date: Option<Date>,
) -> bool {
    match (start_date, expiry_date, check_date) {
        (Some(start), Some(expiry), Some(check)) => start <= check && check <= expiry,
        _ => false,
    }
}

/// Datetime-precision variant of [`is_valid_on_date`], inclusive on both
/// ends.
#[must_use]
pub fn is_valid_at_time_and_date(
    start: Option<DateTime>,
    expiry: Option<DateTime>,
    check: Option<DateTime>,
) -> bool {
    match (start, expiry, check) {
        (Some(start), Some(expiry), Some(check)) => start <= check && check <= expiry,
        _ => false,
    }
}

/// Whether a percentage is present and within `(0, 100]`. Zero percent is
/// rejected; exactly 100 is allowed.
#[must_use]
pub fn is_valid_percentage(percentage: Option<Decimal>) -> bool {
    percentage.is_some_and(|percentage| {
        percentage > Decimal::ZERO && percentage <= PERCENTAGE_MAX
    })
}

/// Whether the coupon may be applied right now, ignoring the pending
/// application.
#[must_use]
pub fn can_be_used(usage_limit: i32, times_used: i32) -> bool {
    usage_limit > 0 && times_used >= 0 && times_used < usage_limit
}

/// Whether applying one more use right now would keep the count within the
/// limit.
///
/// Equivalent to [`can_be_used`] for non-negative counts; kept as a separate
/// function because it is the gate the order-completion flow runs
/// immediately before incrementing `times_used`.
#[must_use]
pub fn can_be_used_counting_next_use(usage_limit: i32, times_used: i32) -> bool {
    usage_limit > 0 && times_used >= 0 && times_used.saturating_add(1) <= usage_limit
}

/// Uses left before the coupon hits its limit. Zero for exhausted coupons
/// and for nonsensical inputs (non-positive limit, negative used count).
#[must_use]
pub fn remaining_uses(usage_limit: i32, times_used: i32) -> i32 {
    if usage_limit <= 0 || times_used < 0 {
        return 0;
    }

    (usage_limit - times_used).max(0)
}

/// Today's calendar date in the system time zone.
fn today() -> Date {
    Zoned::now().date()
}
