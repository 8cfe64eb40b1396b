//! Tests for the public greet() API

use rstest::rstest;

use greet::greet;

#[rstest]
#[case("Alice", "Hello, Alice! Welcome to my library.")]
#[case("", "Hello, ! Welcome to my library.")]
#[case("O'Brien", "Hello, O'Brien! Welcome to my library.")]
#[case("José", "Hello, José! Welcome to my library.")]
fn given_name_when_greeting_then_matches_literal_concatenation(
    #[case] name: &str,
    #[case] expected: &str,
) {
    assert_eq!(greet(name), expected);
    // Same as building the string by hand
    assert_eq!(greet(name), format!("Hello, {}! Welcome to my library.", name));
}

#[test]
fn given_same_name_when_greeting_twice_then_output_is_identical() {
    assert_eq!(greet("Alice"), greet("Alice"));
}

#[test]
fn given_name_with_braces_when_greeting_then_braces_pass_through() {
    // Names are data, not templates
    assert_eq!(
        greet("{name}"),
        "Hello, {name}! Welcome to my library."
    );
}

#[test]
fn given_many_threads_when_greeting_then_all_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| greet("Alice")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Hello, Alice! Welcome to my library.");
    }
}
