//! Greeting service
//!
//! Renders greetings from a template validated once at construction.

use tracing::debug;

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::GreetingTemplate;

/// Service producing greetings from a validated template.
///
/// Construction parses the template; rendering never fails afterwards.
#[derive(Debug)]
pub struct GreeterService {
    template: GreetingTemplate,
}

impl GreeterService {
    /// Build a service from loaded settings.
    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        Self::with_template(&settings.template)
    }

    /// Build a service from an explicit template string.
    pub fn with_template(template: &str) -> ApplicationResult<Self> {
        debug!("with_template: {:?}", template);
        let template = GreetingTemplate::parse(template)?;
        Ok(Self { template })
    }

    /// Greet a single name.
    pub fn greet(&self, name: &str) -> String {
        self.template.render(name)
    }

    /// Greet every name in order.
    pub fn greet_all(&self, names: &[String]) -> Vec<String> {
        names.iter().map(|name| self.greet(name)).collect()
    }

    /// Greet every name in a batch input, one name per line.
    ///
    /// Names are trimmed; blank lines and `#` comment lines are skipped.
    pub fn greet_lines(&self, content: &str) -> Vec<String> {
        let mut greetings = Vec::new();
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            greetings.push(self.greet(trimmed));
        }
        debug!("greet_lines: {} greetings", greetings.len());
        greetings
    }

    /// The template this service renders with.
    pub fn template(&self) -> &GreetingTemplate {
        &self.template
    }
}

impl Default for GreeterService {
    /// Service over the canonical template.
    fn default() -> Self {
        Self {
            template: GreetingTemplate::default(),
        }
    }
}
