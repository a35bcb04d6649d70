//! Error types for the command layer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return to the shell.
///
/// Lookups that merely miss (an unknown name in `find`) are `Option`s at
/// the data-model layer; only the failure classes the shell reports as
/// fixed strings become errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Wrong number of command arguments
    #[error("missing or malformed arguments")]
    BadArguments,

    /// A lookup keyed on a contact name that is not in the book
    #[error("unknown contact: {0}")]
    UnknownContact(String),

    /// A positional argument that was not supplied
    #[error("no argument at position {0}")]
    MissingArgument(usize),
}

impl CommandError {
    /// The fixed user-facing string the shell prints for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::BadArguments => "Give me name and phone please.",
            Self::UnknownContact(_) => "Enter actual key",
            Self::MissingArgument(_) => "Do not have user on this position",
        }
    }
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
