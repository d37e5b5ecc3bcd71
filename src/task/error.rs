use thiserror::Error;

/// A rejected command. The `Display` text is the exact line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("I don't know what the command \"{0}\" is.")]
    UnknownCommand(String),

    #[error("Could not find a project with the name \"{0}\".")]
    ProjectNotFound(String),

    #[error("Could not find a task with an ID of {0}.")]
    TaskNotFound(String),

    #[error("Please Enter a Valid ID")]
    InvalidId,

    #[error("Please enter a Valid Date")]
    InvalidDate,

    #[error("Please Enter the Correct Syntax")]
    Syntax,
}

pub type Result<T> = std::result::Result<T, CommandError>;
