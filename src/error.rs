use thiserror::Error;

/// Recoverable failures raised by the dialogue core.
///
/// None of these are fatal: the interpreter turns each one into a
/// re-prompt or an explanatory line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BotError {
    #[error("I couldn't find a task named '{0}'. Please check the name and try again.")]
    NotFound(String),
    #[error("There is no task at position {0} in the list.")]
    NoSuchPosition(usize),
    #[error("Task '{0}' is already marked as completed.")]
    AlreadyCompleted(String),
    #[error("'{input}' is not a valid {expected}")]
    InvalidFormat { input: String, expected: &'static str },
    #[error("input was empty")]
    EmptyInput,
}

pub type BotResult<T> = Result<T, BotError>;
