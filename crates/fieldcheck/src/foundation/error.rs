//! Crate error type
//!
//! Validation outcomes are never errors: they are [`Status`](super::Status)
//! values delivered through results. This type only covers misuse at
//! construction time and the transform diagnostics attached to results.

/// Errors raised while building rules or bridging preconditions.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A regular expression handed to [`Pattern`](crate::rules::Pattern)
    /// failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A transform supplied to `then_value_of_field_with` rejected its
    /// input. The field was evaluated as null.
    #[error("transform of field '{field}' failed: {message}")]
    Transform { field: String, message: String },
}

impl Error {
    /// Creates a transform diagnostic.
    pub fn transform(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transform {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the field name for transform diagnostics.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Transform { field, .. } => Some(field),
            Self::InvalidPattern { .. } => None,
        }
    }
}
