//! Whole-string regular expression patterns

use std::fmt;

use regex::Regex;

use crate::foundation::Error;

/// A regular expression that must match an entire value, together with a
/// human-readable description of the expected syntax.
///
/// The description is never interpreted; it is carried into results so a
/// host can tell the user what was expected.
///
/// # Examples
///
/// ```
/// use fieldcheck::rules::Pattern;
///
/// let pattern = Pattern::new(r"[A-Z]\d+", "A-Z followed by digits").unwrap();
/// assert!(pattern.is_full_match("A20"));
/// assert!(!pattern.is_full_match("A20x"));
/// assert_eq!(pattern.description(), "A-Z followed by digits");
/// ```
#[derive(Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
    description: String,
}

impl Pattern {
    /// Compiles `pattern` so that it only matches whole strings.
    pub fn new(pattern: &str, description: impl Into<String>) -> Result<Self, Error> {
        let anchored =
            Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;

        Ok(Self {
            source: pattern.to_owned(),
            anchored,
            description: description.into(),
        })
    }

    /// Re-anchors an already compiled expression.
    pub fn from_regex(regex: &Regex, description: impl Into<String>) -> Result<Self, Error> {
        Self::new(regex.as_str(), description)
    }

    /// The expression as written by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Description of the expected syntax.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("description", &self.description)
            .finish()
    }
}
