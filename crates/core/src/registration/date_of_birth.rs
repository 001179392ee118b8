//! Date of birth validator

use jiff::{ToSpan, Zoned, civil::Date};

use crate::registration::RegistrationError;

/// Minimum customer age in whole years.
const MIN_AGE: i32 = 18;

/// Check that a customer is old enough to register.
///
/// Age is counted in whole years, so a customer turning 18 today passes.
///
/// # Errors
///
/// Returns an error if the date of birth is missing or the customer is
/// younger than 18.
pub fn validate_date_of_birth(date_of_birth: Option<Date>) -> Result<(), RegistrationError> {
    let dob = date_of_birth.ok_or(RegistrationError::DateOfBirthMissing)?;

    let today = Zoned::now().date();
    let mut age = i32::from(today.year()) - i32::from(dob.year());

    // The birthday may not have occurred yet this year.
    if dob.saturating_add(age.years()) > today {
        age -= 1;
    }

    if age < MIN_AGE {
        return Err(RegistrationError::Underage);
    }

    Ok(())
}
