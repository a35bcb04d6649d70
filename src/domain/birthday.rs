//! Birthday rule and alias.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;

static BIRTHDAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday regex"));

/// Validation rule for birthday strings.
///
/// # Validation Rules
///
/// - Must match `dd.mm.yyyy` exactly (two digits, dot, two digits, dot,
///   four digits)
///
/// This is a syntax check only. Calendar validity is NOT enforced:
/// "31.02.2099" passes. The schedule module deals with such values at
/// report time.
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    fn validate(raw: &str) -> Result<(), ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        Ok(())
    }
}

/// A syntactically validated `dd.mm.yyyy` birthday.
pub type Birthday = ValidatedField<BirthdayRule>;
