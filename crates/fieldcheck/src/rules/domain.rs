//! Permitted-value domains for membership rules
//!
//! A [`Domain`] is an ordered list of permitted values with an optional name
//! used in reports. Enumerations describe themselves as a domain through
//! [`NamedDomain`].
//!
//! # Examples
//!
//! ```
//! use fieldcheck::rules::{Domain, NamedDomain};
//!
//! enum Direction { North, South, East, West }
//!
//! impl NamedDomain for Direction {
//!     const NAME: &'static str = "Direction";
//!     const TOKENS: &'static [&'static str] = &["North", "South", "East", "West"];
//! }
//!
//! let domain = Domain::of::<Direction>();
//! assert_eq!(domain.name(), Some("Direction"));
//! assert_eq!(domain.len(), 4);
//! ```

use serde::Serialize;

use crate::foundation::Value;

/// A type whose permitted values form a fixed, named list of tokens.
pub trait NamedDomain {
    /// Name shown in reports.
    const NAME: &'static str;
    /// Permitted tokens, in declaration order.
    const TOKENS: &'static [&'static str];
}

/// An ordered list of permitted values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    values: Vec<Value>,
}

impl Domain {
    /// Creates an unnamed domain.
    pub fn new<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            name: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a named domain.
    pub fn named<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            name: Some(name.into()),
            ..Self::new(values)
        }
    }

    /// Builds the domain described by `D`.
    #[must_use]
    pub fn of<D: NamedDomain>() -> Self {
        Self::named(D::NAME, D::TOKENS.iter().copied())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact membership.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    /// Membership comparing upper-cased display forms, so it accepts any
    /// value kind.
    #[must_use]
    pub fn contains_ignore_case(&self, value: &Value) -> bool {
        let wanted = value.to_string().to_uppercase();
        self.values
            .iter()
            .any(|permitted| permitted.to_string().to_uppercase() == wanted)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Domain {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Domain {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}
