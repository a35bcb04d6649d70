//! The interactive shell.
//!
//! A line-oriented loop over any `BufRead`/`Write` pair, so the whole
//! surface runs against in-memory buffers in tests. Handler errors are
//! translated to their fixed user strings here; nothing in the loop is
//! fatal.

use crate::book::AddressBook;
use crate::commands::{handlers, parse_input, Command};
use crate::error::CommandResult;
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";
pub const PROMPT: &str = "Enter a command: ";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Run the command loop until `close`/`exit` or end of input.
///
/// Blank lines are ignored. End of input behaves like `exit` so piped
/// scripts finish cleanly.
pub fn run_shell<R: BufRead, W: Write>(
    book: &mut AddressBook,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(?command, "dispatching command");

        match command {
            Command::Exit => {
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }
            Command::Hello => writeln!(output, "How can I help you?")?,
            Command::Add => respond(&mut output, handlers::add_contact(&args, book))?,
            Command::Change => respond(&mut output, handlers::change_contact(&args, book))?,
            Command::All => writeln!(output, "{}", handlers::list_all(book))?,
            Command::Phone => respond(&mut output, handlers::show_phones(&args, book))?,
            Command::AddBirthday => respond(&mut output, handlers::add_birthday(&args, book))?,
            Command::ShowBirthday => respond(&mut output, handlers::show_birthday(&args, book))?,
            Command::Birthdays => {
                let today = Local::now().date_naive();
                writeln!(output, "{}", handlers::birthdays(book, today))?;
            }
            Command::Commands => writeln!(output, "{}", handlers::help_text())?,
            Command::Unknown => writeln!(output, "{}", INVALID_COMMAND)?,
        }
    }
}

/// Print a handler's reply, or the fixed string for its error.
fn respond<W: Write>(output: &mut W, result: CommandResult<String>) -> io::Result<()> {
    match result {
        Ok(reply) => writeln!(output, "{}", reply),
        Err(err) => {
            warn!(%err, "command failed");
            writeln!(output, "{}", err.user_message())
        }
    }
}
