//! Email validator

use std::sync::LazyLock;

use regex::Regex;

use crate::registration::RegistrationError;

/// Accepted top-level domains.
const VALID_TLDS: [&str; 6] = [".com", ".dk", ".org", ".net", ".eu", ".edu"];

/// `local@domain.tld` shape check.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "the pattern is a checked constant")]
    let pattern = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    pattern
});

/// Check an email address against the registration rules.
///
/// # Errors
///
/// Returns an error if the address is missing or blank, does not match the
/// `local@domain.tld` shape, or does not end in one of the accepted TLDs.
pub fn validate_email(email: Option<&str>) -> Result<(), RegistrationError> {
    let email = email.ok_or(RegistrationError::EmailMissing)?;

    if email.trim().is_empty() {
        return Err(RegistrationError::EmailMissing);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(RegistrationError::EmailMalformed);
    }

    if !VALID_TLDS.iter().any(|tld| email.ends_with(tld)) {
        return Err(RegistrationError::EmailUnsupportedTld);
    }

    Ok(())
}
