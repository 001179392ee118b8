//! Password validator

use crate::registration::RegistrationError;

/// Shortest accepted password.
const MIN_LENGTH: usize = 8;

/// Longest accepted password.
const MAX_LENGTH: usize = 64;

/// Check a password against the registration length rules.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns an error if the password is missing or blank, shorter than 8
/// characters, or longer than 64 characters.
pub fn validate_password(password: Option<&str>) -> Result<(), RegistrationError> {
    let password = password.ok_or(RegistrationError::PasswordMissing)?;

    if password.trim().is_empty() {
        return Err(RegistrationError::PasswordMissing);
    }

    let length = password.chars().count();

    if length < MIN_LENGTH {
        return Err(RegistrationError::PasswordTooShort);
    }

    if length > MAX_LENGTH {
        return Err(RegistrationError::PasswordTooLong);
    }

    Ok(())
}
