//! Registration validators
//!
//! Field validators applied when a customer registers. Unlike the coupon
//! rule checks these are fallible: the first violated rule is reported as a
//! [`RegistrationError`] whose message names the broken constraint. The
//! Danish mobile check is the deliberate exception and stays a plain
//! boolean, because signup flows branch on it rather than abort.

mod date_of_birth;
mod email;
mod password;
mod phone;

pub use date_of_birth::validate_date_of_birth;
pub use email::validate_email;
pub use password::validate_password;
pub use phone::is_valid_danish_mobile;

use thiserror::Error;

/// Violations reported by the registration field validators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// Email was missing or blank.
    #[error("email cannot be empty")]
    EmailMissing,

    /// Email did not match the `local@domain.tld` shape.
    #[error("invalid email address")]
    EmailMalformed,

    /// Email domain did not end in an accepted TLD.
    #[error("email must end with one of: .com, .dk, .org, .net, .eu, .edu")]
    EmailUnsupportedTld,

    /// Password was missing or blank.
    #[error("password cannot be empty")]
    PasswordMissing,

    /// Password was shorter than the minimum length.
    #[error("password must be at least 8 characters long")]
    PasswordTooShort,

    /// Password was longer than the maximum length.
    #[error("password must be at most 64 characters long")]
    PasswordTooLong,

    /// Date of birth was missing.
    #[error("date of birth is required")]
    DateOfBirthMissing,

    /// Customer has not reached the minimum age yet.
    #[error("customer must be at least 18 years old")]
    Underage,
}
