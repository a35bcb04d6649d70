//! Contact Assistant - a command-line address book with birthday reminders.
//!
//! The library holds the full data model and command surface; the binary is
//! a thin shell over it.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact [`Record`]
//! - **book**: the insertion-ordered [`AddressBook`]
//! - **schedule**: the upcoming-birthday report
//! - **commands**: vocabulary parsing and command handlers
//! - **shell**: the interactive loop, generic over reader/writer
//! - **error**: the command error taxonomy
//! - **config**: environment-based configuration

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod schedule;
pub mod shell;

pub use book::AddressBook;
pub use commands::{parse_input, Command};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidatedField, ValidationError};
pub use error::{CommandError, CommandResult};
pub use models::Record;
pub use schedule::{upcoming_birthdays, BirthdayReport};
pub use shell::run_shell;
