pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, GreeterService};
pub use config::Settings;
pub use domain::{DomainError, GreetingTemplate, DEFAULT_TEMPLATE};

/// Greets a name with the canonical template.
///
/// Returns exactly `"Hello, " + name + "! Welcome to my library."` with no
/// extra whitespace or punctuation. The function is pure: no I/O, no state,
/// and equal inputs always yield byte-identical output, so it is safe to
/// call from any number of threads.
///
/// Empty names are not rejected; `greet("")` yields
/// `"Hello, ! Welcome to my library."`.
///
/// # Examples
///
/// ```
/// assert_eq!(greet::greet("Alice"), "Hello, Alice! Welcome to my library.");
/// ```
pub fn greet(name: &str) -> String {
    GreetingTemplate::default().render(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_canonical_wording() {
        assert_eq!(greet("Alice"), "Hello, Alice! Welcome to my library.");
    }

    #[test]
    fn test_greet_is_idempotent() {
        assert_eq!(greet("Bob"), greet("Bob"));
    }
}
