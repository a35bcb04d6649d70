//! Generic validated field wrapper.
//!
//! Every user-supplied value in a contact record is a [`ValidatedField`]
//! specialized by a [`FieldRule`]: the rule runs once at construction, and
//! from then on the wrapped string is immutable. The concrete rules live in
//! the sibling modules ([`crate::domain::phone`], [`crate::domain::birthday`])
//! plus [`PlainTextRule`] here for contact names.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A construction-time validation rule for a [`ValidatedField`].
pub trait FieldRule {
    /// Check a raw input string, rejecting it with a [`ValidationError`].
    fn validate(raw: &str) -> Result<(), ValidationError>;
}

/// A string value wrapped with a format rule applied at construction.
///
/// The wrapped value cannot be mutated after construction, so holding a
/// `ValidatedField<R>` is proof the value passed `R::validate`.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0931234567").unwrap();
/// assert_eq!(phone.as_str(), "0931234567");
/// assert!(PhoneNumber::new("123").is_err());
/// ```
pub struct ValidatedField<R: FieldRule> {
    value: String,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> ValidatedField<R> {
    /// Create a new field, validating the raw input against `R`.
    ///
    /// # Errors
    ///
    /// Returns the rule's [`ValidationError`] when the input is rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let value = raw.into();
        R::validate(&value)?;

        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

// The manual impls below exist because derive would bound `R` itself,
// and rule markers are never Clone/Eq/Hash.

impl<R: FieldRule> Clone for ValidatedField<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: FieldRule> fmt::Debug for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValidatedField").field(&self.value).finish()
    }
}

impl<R: FieldRule> PartialEq for ValidatedField<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: FieldRule> Eq for ValidatedField<R> {}

impl<R: FieldRule> PartialOrd for ValidatedField<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: FieldRule> Ord for ValidatedField<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R: FieldRule> Hash for ValidatedField<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: FieldRule> PartialEq<str> for ValidatedField<R> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<R: FieldRule> PartialEq<&str> for ValidatedField<R> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

// Display support
impl<R: FieldRule> fmt::Display for ValidatedField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as string
impl<R: FieldRule> Serialize for ValidatedField<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for ValidatedField<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedField::new(s).map_err(serde::de::Error::custom)
    }
}

/// Rule for free-form required text, such as a contact name.
///
/// Rejects only blank input.
pub struct PlainTextRule;

impl FieldRule for PlainTextRule {
    fn validate(raw: &str) -> Result<(), ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A contact's name.
pub type ContactName = ValidatedField<PlainTextRule>;
