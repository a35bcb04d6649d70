//! Phone number rule and alias.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};

/// Validation rule for phone numbers.
///
/// # Validation Rules
///
/// - Must consist only of decimal digits
/// - Length must be between 10 and 13 digits inclusive
///
/// Deliberately no normalization: formatting characters such as `+` or `-`
/// are rejected rather than stripped, and duplicates are the caller's
/// concern.
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    fn validate(raw: &str) -> Result<(), ValidationError> {
        let all_digits = !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit());

        if !all_digits || !(10..=13).contains(&raw.len()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(())
    }
}

/// A type-safe, validated phone number.
pub type PhoneNumber = ValidatedField<PhoneRule>;
