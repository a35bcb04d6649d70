//! Contact record: one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A single contact: a required name, an ordered list of phone numbers,
/// and an optional birthday.
///
/// The record owns its fields; phones keep insertion order and may contain
/// duplicates. All mutation goes through validating methods, so every
/// stored value has already passed its field rule.
///
/// # Example
///
/// ```
/// use contact_assistant::models::Record;
///
/// let mut record = Record::new("Anna").unwrap();
/// record.add_phone("0931234567").unwrap();
/// record.set_birthday("10.06.1990").unwrap();
/// assert_eq!(
///     record.to_string(),
///     "Contact name: Anna, phones: 0931234567, Birthday: 10.06.1990"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name only.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for blank names.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the input is not
    /// 10 to 13 decimal digits.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Remove every phone exactly equal to `raw`, returning how many were
    /// removed. Removing a phone that is not present is not an error.
    pub fn delete_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone != raw);
        let removed = before - self.phones.len();

        debug!(
            contact = self.name.as_str(),
            phone = raw,
            removed, "phone deleted from contact"
        );

        removed
    }

    /// Replace `old` with `new`: delete all copies of `old`, then add `new`.
    ///
    /// Not atomic: `old` is removed before `new` is validated, so on a
    /// validation failure the old phone is already gone.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when `new` fails validation.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        self.delete_phone(old);
        self.add_phone(new)?;

        debug!(contact = self.name.as_str(), "phone changed in contact");
        Ok(())
    }

    /// Find a phone by exact value.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Validate and assign the birthday, silently overwriting any prior one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the input does not
    /// match `dd.mm.yyyy`.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;

        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", phone)?;
        }

        if let Some(ref birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("Anna").unwrap();
        assert_eq!(record.name(), "Anna");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_blank_name() {
        assert_eq!(Record::new("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1234567890", "0987654321", "1234567890"]);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = Record::new("Anna").unwrap();
        assert!(record.add_phone("12345").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_delete_phone_removes_all_occurrences() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.delete_phone("1234567890"), 2);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0987654321"]);
    }

    #[test]
    fn test_delete_phone_missing_is_noop() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.delete_phone("0000000000"), 0);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_change_phone() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();

        record.change_phone("1234567890", "0987654321").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0987654321"]);
    }

    #[test]
    fn test_change_phone_not_atomic() {
        // The old phone is deleted before the new one is validated, so a
        // bad replacement leaves the record without either number.
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();

        let result = record.change_phone("1234567890", "bad");
        assert!(result.is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(
            record.find_phone("1234567890").map(|p| p.as_str()),
            Some("1234567890")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites_silently() {
        let mut record = Record::new("Anna").unwrap();
        record.set_birthday("10.06.1990").unwrap();
        record.set_birthday("11.07.1991").unwrap();

        assert_eq!(record.birthday().map(|b| b.as_str()), Some("11.07.1991"));
    }

    #[test]
    fn test_set_birthday_invalid_leaves_old_value() {
        let mut record = Record::new("Anna").unwrap();
        record.set_birthday("10.06.1990").unwrap();

        assert!(record.set_birthday("not-a-date").is_err());
        assert_eq!(record.birthday().map(|b| b.as_str()), Some("10.06.1990"));
    }

    #[test]
    fn test_display_without_birthday() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: Anna, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();
        record.set_birthday("10.06.1990").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: Anna, phones: 1234567890, Birthday: 10.06.1990"
        );
    }

    #[test]
    fn test_display_no_phones() {
        let record = Record::new("Anna").unwrap();
        assert_eq!(record.to_string(), "Contact name: Anna, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("Anna").unwrap();
        record.add_phone("1234567890").unwrap();
        record.set_birthday("10.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Anna","phones":["1234567890"],"birthday":"10.06.1990"}"#
        );
    }
}
