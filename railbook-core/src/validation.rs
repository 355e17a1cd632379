use once_cell::sync::Lazy;
use regex::Regex;

use crate::{CoreError, CoreResult};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Exactly ten ASCII digits, no separators or country prefix.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Parses the age field of the passenger form. Empty input clears the age.
pub fn parse_age(input: &str) -> CoreResult<Option<u8>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<u8>() {
        Ok(age) if (1..=120).contains(&age) => Ok(Some(age)),
        _ => Err(CoreError::ValidationError(format!(
            "Age must be a whole number between 1 and 120, got '{}'",
            trimmed
        ))),
    }
}
