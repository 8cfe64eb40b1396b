//! Domain entity: the greeting template

use crate::domain::DomainError;

/// The canonical greeting template.
pub const DEFAULT_TEMPLATE: &str = "Hello, {name}! Welcome to my library.";

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Literal text, emitted as-is
    Literal(String),
    /// The `{name}` placeholder
    Name,
}

/// A validated greeting template.
///
/// Parsing splits the source string into literal segments and `{name}`
/// placeholder segments, so rendering is a single pass with no re-scanning.
/// A template that parsed can always be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl GreetingTemplate {
    /// Parse a template string.
    ///
    /// The only recognized placeholder is `{name}`. Literal braces can be
    /// written as `{{` and `}}`.
    ///
    /// # Errors
    ///
    /// * [`DomainError::EmptyTemplate`] - source is empty or whitespace-only
    /// * [`DomainError::UnclosedPlaceholder`] - a `{` is never closed
    /// * [`DomainError::UnknownPlaceholder`] - a placeholder other than `name`
    /// * [`DomainError::MissingNamePlaceholder`] - no `{name}` occurs at all
    pub fn parse(source: &str) -> Result<Self, DomainError> {
        if source.trim().is_empty() {
            return Err(DomainError::EmptyTemplate);
        }

        let mut segments: Vec<Segment> = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for p in chars.by_ref() {
                        if p == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(p);
                    }
                    if !closed {
                        return Err(DomainError::UnclosedPlaceholder {
                            template: source.to_string(),
                        });
                    }
                    if placeholder != "name" {
                        return Err(DomainError::UnknownPlaceholder { placeholder });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Name);
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if !segments.contains(&Segment::Name) {
            return Err(DomainError::MissingNamePlaceholder {
                template: source.to_string(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Render the template, substituting `name` for every placeholder.
    ///
    /// Pure: no I/O, no state. Equal inputs yield byte-identical output.
    pub fn render(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + name.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Name => out.push_str(name),
            }
        }
        out
    }

    /// The original template string.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Default for GreetingTemplate {
    /// The canonical template, constructed without parsing.
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![
                Segment::Literal("Hello, ".to_string()),
                Segment::Name,
                Segment::Literal("! Welcome to my library.".to_string()),
            ],
        }
    }
}
