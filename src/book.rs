//! The address book: an insertion-ordered collection of contact records.

use crate::models::Record;
use crate::schedule::{self, BirthdayReport};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A keyed collection of [`Record`]s, unique by contact name.
///
/// Enumeration follows insertion order. Inserting a record under an
/// existing name replaces the old record in place (replace semantics, not
/// merge), keeping its original position.
///
/// The book has no internal synchronization; embedding callers must
/// serialize access to an instance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressBook {
    entries: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. An existing record under the
    /// same name is replaced.
    pub fn add_record(&mut self, record: Record) {
        self.entries.insert(record.name().to_string(), record);
    }

    /// Remove and return the record for `name`. Absence is a no-op, not an
    /// error. Remaining records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.entries.shift_remove(name)
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket upcoming birthdays by shifted weekday, relative to `today`.
    pub fn birthdays_per_week(&self, today: NaiveDate) -> BirthdayReport {
        schedule::upcoming_birthdays(self.iter(), today)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_then_find_round_trip() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "1234567890"));

        let found = book.find("Anna").unwrap();
        assert_eq!(found.name(), "Anna");
    }

    #[test]
    fn test_find_missing() {
        let book = AddressBook::new();
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn test_add_existing_name_replaces() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "1234567890"));
        book.add_record(record("Bob", "0987654321"));
        book.add_record(record("Anna", "1111111111"));

        assert_eq!(book.len(), 2);
        let phones: Vec<&str> = book
            .find("Anna")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(phones, vec!["1111111111"]);

        // Replacement keeps the original position.
        let names: Vec<&str> = book.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Anna", "Bob"]);
    }

    #[test]
    fn test_delete_then_find_is_absent() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "1234567890"));

        assert!(book.delete("Anna").is_some());
        assert!(book.find("Anna").is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "1234567890"));

        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", "1234567890"));
        book.add_record(record("Bob", "0987654321"));
        book.add_record(record("Clara", "1111111111"));

        book.delete("Bob");
        let names: Vec<&str> = book.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Anna", "Clara"]);
    }

    #[test]
    fn test_display_empty_book_is_empty_string() {
        let book = AddressBook::new();
        assert_eq!(book.to_string(), "");
    }

    #[test]
    fn test_display_one_record_per_line_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", "0987654321"));
        book.add_record(record("Anna", "1234567890"));

        assert_eq!(
            book.to_string(),
            "Contact name: Bob, phones: 0987654321\n\
             Contact name: Anna, phones: 1234567890"
        );
    }
}
