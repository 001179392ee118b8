//! Warranty validation

use jiff::civil::Date;
use thiserror::Error;

/// Longest accepted warranty description.
const DESCRIPTION_MAX_LENGTH: usize = 500;

/// Violations reported when creating a warranty.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyError {
    /// Start date was missing.
    #[error("warranty start date is required")]
    StartDateMissing,

    /// End date was missing.
    #[error("warranty end date is required")]
    EndDateMissing,

    /// End date fell before the start date.
    #[error("warranty end date must be after the start date")]
    EndBeforeStart,

    /// Start and end were the same day; coverage must span at least one
    /// full day.
    #[error("warranty must cover at least one full day")]
    NoCoverage,

    /// Description was missing or blank.
    #[error("warranty description cannot be empty")]
    DescriptionMissing,

    /// Description exceeded the length ceiling.
    #[error("warranty description must be at most 500 characters long")]
    DescriptionTooLong,
}

/// Check the coverage window of a new warranty.
///
/// # Errors
///
/// Returns an error if either date is missing, the end date is before the
/// start date, or the two dates are the same day.
pub fn validate_warranty_dates(
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> Result<(), WarrantyError> {
    let start = start_date.ok_or(WarrantyError::StartDateMissing)?;
    let end = end_date.ok_or(WarrantyError::EndDateMissing)?;

    if end < start {
        return Err(WarrantyError::EndBeforeStart);
    }

    if end == start {
        return Err(WarrantyError::NoCoverage);
    }

    Ok(())
}

/// Check a warranty description.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns an error if the description is missing, blank, or longer than
/// 500 characters.
pub fn validate_description(description: Option<&str>) -> Result<(), WarrantyError> {
    let description = description.ok_or(WarrantyError::DescriptionMissing)?;

    if description.trim().is_empty() {
        return Err(WarrantyError::DescriptionMissing);
    }

    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        return Err(WarrantyError::DescriptionTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn a_window_of_at_least_one_day_passes() {
        assert_eq!(
            validate_warranty_dates(Some(date(2026, 1, 1)), Some(date(2026, 1, 2))),
            Ok(())
        );
        assert_eq!(
            validate_warranty_dates(Some(date(2026, 1, 1)), Some(date(2028, 1, 1))),
            Ok(())
        );
    }

    #[test]
    fn missing_dates_are_reported_individually() {
        assert_eq!(
            validate_warranty_dates(None, Some(date(2026, 1, 2))),
            Err(WarrantyError::StartDateMissing)
        );
        assert_eq!(
            validate_warranty_dates(Some(date(2026, 1, 1)), None),
            Err(WarrantyError::EndDateMissing)
        );
    }

    #[test]
    fn an_inverted_window_is_rejected() {
        assert_eq!(
            validate_warranty_dates(Some(date(2026, 1, 2)), Some(date(2026, 1, 1))),
            Err(WarrantyError::EndBeforeStart)
        );
    }

    #[test]
    fn a_zero_day_window_is_rejected() {
        assert_eq!(
            validate_warranty_dates(Some(date(2026, 1, 1)), Some(date(2026, 1, 1))),
            Err(WarrantyError::NoCoverage)
        );
    }

    #[test]
    fn descriptions_up_to_the_ceiling_pass() {
        assert_eq!(validate_description(Some("two year pixel warranty")), Ok(()));
        assert_eq!(validate_description(Some(&"x".repeat(500))), Ok(()));
    }

    #[test]
    fn blank_and_oversized_descriptions_are_rejected() {
        assert_eq!(
            validate_description(None),
            Err(WarrantyError::DescriptionMissing)
        );
        assert_eq!(
            validate_description(Some("   ")),
            Err(WarrantyError::DescriptionMissing)
        );
        assert_eq!(
            validate_description(Some(&"x".repeat(501))),
            Err(WarrantyError::DescriptionTooLong)
        );
    }
}
