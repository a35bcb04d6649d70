//! Line parsing for the command shell.

/// The shell's command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> <phone>`
    Add,
    /// `change <name> <phone>`
    Change,
    /// `all`
    All,
    /// `phone <name>...`
    Phone,
    /// `add-birthday <name> <dd.mm.yyyy>`
    AddBirthday,
    /// `show-birthday <name>`
    ShowBirthday,
    /// `birthdays`
    Birthdays,
    /// `commands`
    Commands,
    /// `close` or `exit`
    Exit,
    /// Anything else
    Unknown,
}

impl Command {
    fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "all" => Self::All,
            "phone" => Self::Phone,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "commands" => Self::Commands,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// Split an input line into a command and its arguments.
///
/// Tokens are whitespace-delimited; the command word is matched
/// case-insensitively, arguments are passed through untouched. Returns
/// `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    let command = Command::from_word(word.to_lowercase().as_str());

    Some((command, tokens.collect()))
}
