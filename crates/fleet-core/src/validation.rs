//! Field validation and normalization rules for identity records.

use crate::{CoreError, ErrorLocation, Result};

use std::panic::Location;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Characters stripped from phone numbers before validation.
const PHONE_SEPARATORS: &[char] = &[' ', '-', '.', '(', ')'];
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

/// Reject absent/empty required fields.
#[track_caller]
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CoreError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Structural email check: exactly one `@`, non-empty local part,
/// non-empty dotted domain, no whitespace.
#[track_caller]
pub fn validate_email(email: &str) -> Result<()> {
    let location = ErrorLocation::from(Location::caller());
    let invalid = |value: &str| CoreError::InvalidEmail {
        value: value.to_string(),
        location,
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid(email));
    }

    if email.matches('@').count() != 1 {
        return Err(invalid(email));
    }

    let (local, domain) = email.split_once('@').ok_or_else(|| invalid(email))?;

    if local.is_empty() || domain.is_empty() {
        return Err(invalid(email));
    }

    if !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(invalid(email));
    }

    Ok(())
}

/// Lower-case the domain portion of an email address.
/// The local part is case-sensitive per RFC 5321 and is preserved.
pub fn normalize_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Strip separator characters and validate the remaining digits.
/// Returns the normalized form to store.
#[track_caller]
pub fn normalize_phone_number(phone: &str) -> Result<String> {
    let location = ErrorLocation::from(Location::caller());

    let normalized: String = phone
        .chars()
        .filter(|c| !PHONE_SEPARATORS.contains(c))
        .collect();

    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);

    if digits.is_empty()
        || !digits.chars().all(|c| c.is_ascii_digit())
        || digits.len() < MIN_PHONE_DIGITS
        || digits.len() > MAX_PHONE_DIGITS
    {
        return Err(CoreError::InvalidPhone {
            value: phone.to_string(),
            location,
        });
    }

    Ok(normalized)
}

/// Enforce the minimum password length.
#[track_caller]
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::WeakPassword {
            min: MIN_PASSWORD_LENGTH,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
