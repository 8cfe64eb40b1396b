//! Integration tests for Settings config loading with layered precedence.
//!
//! Note: These tests run against temp directories only, so they exercise
//! project-config merging with compiled defaults. (A global config, if one
//! existed on the machine, would sit between the two.)

use std::fs;

use tempfile::TempDir;

use greet::config::{project_config_path, Settings};
use greet::domain::DEFAULT_TEMPLATE;

#[test]
fn given_project_without_config_when_load_then_uses_default_template() {
    // Arrange
    let project_dir = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(project_dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.template, DEFAULT_TEMPLATE);
}

#[test]
fn given_project_config_with_template_when_load_then_overrides_default() {
    // Arrange
    let project_dir = TempDir::new().unwrap();
    let project_config = r#"
template = "Good day, {name}!"
"#;
    fs::write(project_dir.path().join(".greet.toml"), project_config).unwrap();

    // Act
    let settings = Settings::load(Some(project_dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.template, "Good day, {name}!");
}

#[test]
fn given_project_config_with_invalid_template_when_load_then_fails() {
    // Arrange - template lacks the {name} placeholder
    let project_dir = TempDir::new().unwrap();
    let project_config = r#"
template = "Hello, world!"
"#;
    fs::write(project_dir.path().join(".greet.toml"), project_config).unwrap();

    // Act
    let result = Settings::load(Some(project_dir.path()));

    // Assert - bad templates fail at load, not at render
    assert!(result.is_err());
}

#[test]
fn given_project_config_with_malformed_toml_when_load_then_fails() {
    // Arrange
    let project_dir = TempDir::new().unwrap();
    fs::write(project_dir.path().join(".greet.toml"), "template = ").unwrap();

    // Act
    let result = Settings::load(Some(project_dir.path()));

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_missing_config_when_init_then_creates_starter_file() {
    // Arrange
    let project_dir = TempDir::new().unwrap();
    let path = project_config_path(project_dir.path());

    // Act
    Settings::init_config_file(&path).expect("init config");

    // Assert - starter file exists and mentions the template key
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("template"));
    assert!(content.contains("{name}"));
}

#[test]
fn given_existing_config_when_init_then_refuses_overwrite() {
    // Arrange
    let project_dir = TempDir::new().unwrap();
    let path = project_config_path(project_dir.path());
    fs::write(&path, "template = \"Hi {name}\"").unwrap();

    // Act
    let result = Settings::init_config_file(&path);

    // Assert
    assert!(result.is_err());
    // Original content untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "template = \"Hi {name}\"");
}

#[test]
fn given_starter_file_when_loaded_back_then_yields_default_settings() {
    // Arrange - the starter file only contains commented-out keys
    let project_dir = TempDir::new().unwrap();
    let path = project_config_path(project_dir.path());
    Settings::init_config_file(&path).expect("init config");

    // Act
    let settings = Settings::load(Some(project_dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings, Settings::default());
}
