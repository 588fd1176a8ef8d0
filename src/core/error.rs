use thiserror::Error;

/// Errors that can abort invoice generation.
///
/// Only resource and serializer failures are fatal to a render. Layout
/// problems never surface here; they are recorded as [`Outcome::Degraded`]
/// reports on the assembled document instead.
///
/// [`Outcome::Degraded`]: super::Outcome::Degraded
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Embedded font bytes are missing or cannot be parsed.
    #[error("font load failed: {0}")]
    FontLoad(String),

    /// PDF serialization failed.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// One or more input checks failed.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// A single input check failure with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items.2.quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Short rule identifier if applicable (e.g. "LIMIT-ITEMS").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
