//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent template violations.
/// These are independent of configuration and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("template is empty")]
    EmptyTemplate,

    #[error("unclosed placeholder in template: {template}")]
    UnclosedPlaceholder { template: String },

    #[error("unknown placeholder: {{{placeholder}}}")]
    UnknownPlaceholder { placeholder: String },

    #[error("template has no {{name}} placeholder: {template}")]
    MissingNamePlaceholder { template: String },
}
