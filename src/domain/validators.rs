//! Field validators.
//!
//! Pure, total checks over raw string input. Each validator returns the
//! accepted value or a [`ValidationError`] naming the field and the rule that
//! was broken, so callers can abort a construction or skip a single field of
//! an update.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const PERSON_NAME_REASON: &str = "must start with a capital letter and contain at least 3 letters";
pub const FREE_TEXT_REASON: &str = "must be at least 4 characters";
pub const POSTAL_CODE_REASON: &str = "must be a 6-digit code with nonzero leading digit";
pub const PHONE_REASON: &str = "must be 10 digits starting with 6–9";
pub const EMAIL_REASON: &str = "malformed email address";

/// Minimum number of characters accepted for address, city and state.
pub const FREE_TEXT_MIN_CHARS: usize = 4;

static PERSON_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("Failed to compile person name regex")
});

static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("Failed to compile postal code regex"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Accept a proper-case person name: one ASCII capital followed by at least
/// two more ASCII letters.
pub fn validate_person_name(value: &str, field: &str) -> Result<String, ValidationError> {
    accept(&PERSON_NAME_REGEX, value, field, PERSON_NAME_REASON)
}

/// Accept free text (address, city, state) of at least four characters.
///
/// Length is counted in characters, not bytes.
pub fn validate_free_text(value: &str, field: &str) -> Result<String, ValidationError> {
    if value.chars().count() >= FREE_TEXT_MIN_CHARS {
        Ok(value.to_string())
    } else {
        Err(ValidationError::new(field, FREE_TEXT_REASON))
    }
}

/// Accept a six-digit postal code without a leading zero.
pub fn validate_postal_code(value: &str) -> Result<String, ValidationError> {
    accept(&POSTAL_CODE_REGEX, value, "zip", POSTAL_CODE_REASON)
}

/// Accept a ten-digit mobile number whose first digit is 6 through 9.
pub fn validate_phone(value: &str) -> Result<String, ValidationError> {
    accept(&PHONE_REGEX, value, "phone", PHONE_REASON)
}

/// Accept an address shaped like `local@domain.tld` with a TLD of two or
/// more letters.
pub fn validate_email(value: &str) -> Result<String, ValidationError> {
    accept(&EMAIL_REGEX, value, "email", EMAIL_REASON)
}

fn accept(regex: &Regex, value: &str, field: &str, reason: &str) -> Result<String, ValidationError> {
    if regex.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::new(field, reason))
    }
}
