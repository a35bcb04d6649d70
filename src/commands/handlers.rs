//! Command handlers.
//!
//! Each handler validates its arguments, calls into the data model, and
//! returns the response text. Failures come back as [`CommandError`]
//! values; the shell owns the translation to user-facing strings, so no
//! handler ever prints or panics.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;

/// `add <name> <phone>`: create a record, attach the phone, insert it.
///
/// Inserting an existing name replaces that record (the book's overwrite
/// contract).
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = two_args(args)?;

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);

    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: add a phone to an existing contact.
///
/// Despite the name, this is additive: no old phone is removed. An unknown
/// name is not an error and still answers "Contact changed."; both
/// behaviors are long-standing and kept as-is.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = two_args(args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }

    Ok("Contact changed.".to_string())
}

/// `phone <name>...`: one line of phone numbers per requested contact.
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let mut lines = Vec::with_capacity(args.len());

    for name in args {
        let record = book
            .find(name)
            .ok_or_else(|| CommandError::UnknownContact(name.to_string()))?;
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        lines.push(format!("{}: {}", name, phones.join("; ")));
    }

    Ok(lines.join("\n"))
}

/// `add-birthday <name> <dd.mm.yyyy>`: set a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, birthday) = two_args(args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(birthday)?;
            Ok("birthday added for name".to_string())
        }
        None => Ok("Contact not found".to_string()),
    }
}

/// `show-birthday <name>`: report a contact's birthday.
///
/// An absent contact and an unset birthday get distinct messages.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args
        .first()
        .copied()
        .ok_or(CommandError::MissingArgument(0))?;

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("{} have birthday on {}", name, birthday),
            None => format!("{} does not have a birthday set", name),
        },
        None => format!("Contact {} not found", name),
    })
}

/// `all`: every record, one per line, in insertion order.
pub fn list_all(book: &AddressBook) -> String {
    book.to_string()
}

/// `birthdays`: the weekly birthday report relative to `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    book.birthdays_per_week(today).to_string()
}

/// `commands`: the vocabulary listing.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     hello - greet the bot\n\
     add <name> <phone> - add a contact with a phone number\n\
     change <name> <phone> - add another phone to an existing contact\n\
     phone <name>... - show a contact's phone numbers\n\
     all - list every contact\n\
     add-birthday <name> <dd.mm.yyyy> - set a contact's birthday\n\
     show-birthday <name> - show a contact's birthday\n\
     birthdays - upcoming birthdays grouped by weekday\n\
     commands - this listing\n\
     close, exit - leave the bot"
}

/// Exactly two positional arguments, or `BadArguments`.
fn two_args<'a>(args: &[&'a str]) -> CommandResult<(&'a str, &'a str)> {
    match args {
        [first, second] => Ok((*first, *second)),
        _ => Err(CommandError::BadArguments),
    }
}
