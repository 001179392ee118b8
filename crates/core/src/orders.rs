//! Order quantity validation

use thiserror::Error;

/// Largest quantity a single order line may carry.
const MAX_LINE_QUANTITY: i32 = 50;

/// Violations reported when checking order line quantities.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// Quantity was zero or negative.
    #[error("product quantity must be greater than 0")]
    QuantityNotPositive,

    /// Quantity exceeded the per-line ceiling.
    #[error("product quantity must be less than or equal to 50")]
    QuantityTooLarge,
}

/// Check a single order line quantity.
///
/// # Errors
///
/// Returns an error if the quantity is zero or negative, or greater than 50.
pub fn validate_order_quantity(quantity: i32) -> Result<(), OrderError> {
    if quantity <= 0 {
        return Err(OrderError::QuantityNotPositive);
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(OrderError::QuantityTooLarge);
    }

    Ok(())
}

/// Check every line quantity of an order, failing on the first violation.
///
/// # Errors
///
/// Returns the error of the first line that fails [`validate_order_quantity`].
pub fn validate_order_quantities<I>(quantities: I) -> Result<(), OrderError>
where
    I: IntoIterator<Item = i32>,
{
    quantities.into_iter().try_for_each(validate_order_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_within_bounds_pass() {
        assert_eq!(validate_order_quantity(1), Ok(()));
        assert_eq!(validate_order_quantity(25), Ok(()));
        assert_eq!(validate_order_quantity(50), Ok(()));
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert_eq!(
            validate_order_quantity(0),
            Err(OrderError::QuantityNotPositive)
        );
        assert_eq!(
            validate_order_quantity(-3),
            Err(OrderError::QuantityNotPositive)
        );
    }

    #[test]
    fn quantities_over_the_ceiling_are_rejected() {
        assert_eq!(
            validate_order_quantity(51),
            Err(OrderError::QuantityTooLarge)
        );
    }

    #[test]
    fn an_order_fails_on_its_first_bad_line() {
        assert_eq!(validate_order_quantities([1, 2, 50]), Ok(()));
        assert_eq!(
            validate_order_quantities([1, 0, 51]),
            Err(OrderError::QuantityNotPositive)
        );
        assert_eq!(
            validate_order_quantities([1, 51, 0]),
            Err(OrderError::QuantityTooLarge)
        );
    }

    #[test]
    fn an_empty_order_has_nothing_to_reject() {
        assert_eq!(validate_order_quantities([]), Ok(()));
    }
}
