//! Domain layer: the greeting template and its errors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod template;

pub use error::DomainError;
pub use template::{GreetingTemplate, DEFAULT_TEMPLATE};
