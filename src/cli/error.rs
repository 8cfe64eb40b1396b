//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("cannot read input: {0}")]
    Input(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Input(_) => crate::exitcode::NOINPUT,
            CliError::App(e) => match e {
                ApplicationError::Domain(d) => match d {
                    DomainError::EmptyTemplate
                    | DomainError::UnclosedPlaceholder { .. }
                    | DomainError::UnknownPlaceholder { .. }
                    | DomainError::MissingNamePlaceholder { .. } => crate::exitcode::DATAERR,
                },
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}
