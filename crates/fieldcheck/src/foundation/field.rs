//! Named field values

use serde::Serialize;

use super::Value;

/// A named value under validation, with an optional original form.
///
/// The evaluated `value` may be a transformed version of what the user
/// typed; `original` keeps the raw form for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValue {
    name: String,
    value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    original: Option<Value>,
}

impl FieldValue {
    /// Creates a field value without an original form.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            original: None,
        }
    }

    /// Attaches the original (pre-transform) value.
    ///
    /// A null original is treated as absent.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_original(mut self, original: impl Into<Value>) -> Self {
        let original = original.into();
        self.original = (!original.is_null()).then_some(original);
        self
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value used for evaluation.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Original value, if one was supplied.
    #[must_use]
    pub fn original(&self) -> Option<&Value> {
        self.original.as_ref()
    }

    /// The value to show to a user: the original if present, else the
    /// evaluated value.
    #[must_use]
    pub fn presentation_value(&self) -> &Value {
        self.original.as_ref().unwrap_or(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_prefers_original() {
        let field = FieldValue::new("Salary", 20_000).with_original("20,000");
        assert_eq!(field.value(), &Value::Integer(20_000));
        assert_eq!(field.presentation_value(), &Value::from("20,000"));
    }

    #[test]
    fn test_presentation_falls_back_to_value() {
        let field = FieldValue::new("Salary", 20_000);
        assert_eq!(field.original(), None);
        assert_eq!(field.presentation_value(), &Value::Integer(20_000));
    }

    #[test]
    fn test_null_original_is_absent() {
        let field = FieldValue::new("Salary", 1).with_original(None::<&str>);
        assert_eq!(field.original(), None);
    }
}
