//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/greet/greet.toml`
//! 3. Project config: `<project_dir>/.greet.toml`
//! 4. Environment variables: `GREET_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{GreetingTemplate, DEFAULT_TEMPLATE};

/// Unified configuration for greet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Greeting template; must contain the `{name}` placeholder
    pub template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// Get the XDG config directory for greet.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "greet").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("greet.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".greet.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory for local config
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/greet/greet.toml`
    /// 3. Project config: `<project_dir>/.greet.toml`
    /// 4. Environment variables: `GREET_*` prefix (explicit override)
    ///
    /// The merged template is validated; a template that does not parse
    /// fails loading instead of failing later at render time.
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("template", defaults.template.clone())
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(project) = project_dir {
            let local_path = project_config_path(project);
            if local_path.exists() {
                builder = builder.add_source(File::from(local_path).required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("GREET"));

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the merged settings.
    fn validate(&self) -> Result<(), ApplicationError> {
        GreetingTemplate::parse(&self.template)?;
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn config_template() -> String {
        r#"# greet configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/greet/greet.toml   (defines your baseline)
#   Local:  <project_dir>/.greet.toml    (project-specific override)
#   Env:    GREET_* environment variables (explicit overrides)

# Greeting template. Must contain the {name} placeholder.
# template = "Hello, {name}! Welcome to my library."
"#
        .to_string()
    }

    /// Write a starter config file, refusing to overwrite an existing one.
    pub fn init_config_file(path: &Path) -> Result<(), ApplicationError> {
        if path.exists() {
            return Err(ApplicationError::Config {
                message: format!("config file already exists: {}", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ApplicationError::OperationFailed {
                context: format!("create {}", parent.display()),
                source: Box::new(e),
            })?;
        }
        std::fs::write(path, Self::config_template()).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("write {}", path.display()),
                source: Box::new(e),
            }
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_global_override_when_loading_then_uses_default_template() {
        // May pick up a real global config on a developer machine; the
        // template must still parse either way.
        let settings = Settings::load(None).expect("load defaults");
        assert!(GreetingTemplate::parse(&settings.template).is_ok());
    }

    #[test]
    fn given_default_settings_when_serialized_then_roundtrips() {
        let settings = Settings::default();
        let toml = settings.to_toml().expect("serialize");
        let back: Settings = toml::from_str(&toml).expect("parse");
        assert_eq!(settings, back);
    }
}
