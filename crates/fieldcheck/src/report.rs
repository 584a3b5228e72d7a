//! Evaluation reports
//!
//! A [`ValidationResult`] is produced by every terminal rule and handed to
//! the listener; a [`PreResult`] is produced by every guard and travels with
//! the conditions bridged from it. Both are immutable and carry a
//! rule-specific [`Payload`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::foundation::{Error, FieldValue, Status, Value};
use crate::guards::GuardKind;
use crate::rules::{Domain, RuleKind};

// ============================================================================
// PAYLOAD
// ============================================================================

/// Operands a rule or guard was evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Payload {
    /// The rule has no operands.
    None,
    /// A literal operand.
    Compared { value: Value },
    /// Another field the value was compared with.
    ComparedField(FieldValue),
    /// Range bounds.
    Range { from: Value, to: Value },
    /// Permitted values.
    Domain(Domain),
    /// Pattern and its description.
    Syntax { pattern: String, description: String },
}

impl Payload {
    /// The operand the value was compared with.
    #[must_use]
    pub fn compared_value(&self) -> Option<&Value> {
        match self {
            Self::Compared { value } => Some(value),
            Self::ComparedField(field) => Some(field.value()),
            _ => None,
        }
    }

    /// Name of the compared field.
    #[must_use]
    pub fn compared_field_name(&self) -> Option<&str> {
        match self {
            Self::ComparedField(field) => Some(field.name()),
            _ => None,
        }
    }

    /// The compared operand as it should be shown: the compared field's
    /// original value when one was supplied, else the compared value.
    #[must_use]
    pub fn compared_presentation_value(&self) -> Option<&Value> {
        match self {
            Self::Compared { value } => Some(value),
            Self::ComparedField(field) => Some(field.presentation_value()),
            _ => None,
        }
    }

    #[must_use]
    pub fn range(&self) -> Option<(&Value, &Value)> {
        match self {
            Self::Range { from, to } => Some((from, to)),
            _ => None,
        }
    }

    #[must_use]
    pub fn domain(&self) -> Option<&Domain> {
        match self {
            Self::Domain(domain) => Some(domain),
            _ => None,
        }
    }

    /// Description of the expected syntax for pattern rules.
    #[must_use]
    pub fn syntax(&self) -> Option<&str> {
        match self {
            Self::Syntax { description, .. } => Some(description),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Compared { value } => write!(f, " {value}"),
            Self::ComparedField(field) => {
                write!(f, " {} ({})", field.name(), field.presentation_value())
            }
            Self::Range { from, to } => write!(f, " ({from}, {to})"),
            Self::Domain(domain) => {
                f.write_str(" [")?;
                for (i, value) in domain.values().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Self::Syntax { description, .. } => write!(f, " {description}"),
        }
    }
}

// ============================================================================
// PRE-RESULT
// ============================================================================

/// Outcome of one guard on a precondition field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreResult {
    guard: GuardKind,
    status: Status,
    field: FieldValue,
    payload: Payload,
}

impl PreResult {
    pub(crate) fn new(
        guard: GuardKind,
        status: Status,
        field: FieldValue,
        payload: Payload,
    ) -> Self {
        Self {
            guard,
            status,
            field,
            payload,
        }
    }

    #[must_use]
    pub fn kind(&self) -> GuardKind {
        self.guard
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The precondition field the guard was evaluated on.
    #[must_use]
    pub fn field(&self) -> &FieldValue {
        &self.field
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        self.field.name()
    }

    #[must_use]
    pub fn field_value(&self) -> &Value {
        self.field.value()
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of one terminal rule.
///
/// # Examples
///
/// ```
/// use fieldcheck::{NoopListener, Rule, Status, Validator, Value};
///
/// let validator = Validator::new(NoopListener);
/// let result = validator
///     .value_of_field("Age", 24)
///     .check(Rule::GreaterThan(Value::from(24)));
///
/// assert_eq!(result.status(), Status::Failed);
/// assert_eq!(result.compared_value(), Some(&Value::from(24)));
/// assert_eq!(result.to_string(), "Age should_be_greater_than 24: Failed (actual: 24)");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    rule: RuleKind,
    status: Status,
    field: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pre_result: Option<PreResult>,
    payload: Payload,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_diagnostic"
    )]
    diagnostic: Option<Error>,
}

fn serialize_diagnostic<S: Serializer>(
    diagnostic: &Option<Error>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match diagnostic {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ValidationResult {
    pub(crate) fn new(
        rule: RuleKind,
        status: Status,
        field: FieldValue,
        pre_result: Option<PreResult>,
        payload: Payload,
        diagnostic: Option<Error>,
    ) -> Self {
        Self {
            rule,
            status,
            field,
            pre_result,
            payload,
            diagnostic,
        }
    }

    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.rule
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status.is_passed()
    }

    #[must_use]
    pub fn field(&self) -> &FieldValue {
        &self.field
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        self.field.name()
    }

    /// The value the rule was evaluated on.
    #[must_use]
    pub fn field_value(&self) -> &Value {
        self.field.value()
    }

    #[must_use]
    pub fn original_value(&self) -> Option<&Value> {
        self.field.original()
    }

    /// The original value if one was supplied, else the evaluated value.
    #[must_use]
    pub fn presentation_value(&self) -> &Value {
        self.field.presentation_value()
    }

    /// The guard result this rule depended on, if any.
    #[must_use]
    pub fn pre_result(&self) -> Option<&PreResult> {
        self.pre_result.as_ref()
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[must_use]
    pub fn compared_value(&self) -> Option<&Value> {
        self.payload.compared_value()
    }

    #[must_use]
    pub fn compared_field_name(&self) -> Option<&str> {
        self.payload.compared_field_name()
    }

    #[must_use]
    pub fn compared_field_presentation_value(&self) -> Option<&Value> {
        self.payload.compared_presentation_value()
    }

    #[must_use]
    pub fn from_range(&self) -> Option<&Value> {
        self.payload.range().map(|(from, _)| from)
    }

    #[must_use]
    pub fn to_range(&self) -> Option<&Value> {
        self.payload.range().map(|(_, to)| to)
    }

    #[must_use]
    pub fn domain_values(&self) -> Option<&[Value]> {
        self.payload.domain().map(Domain::values)
    }

    #[must_use]
    pub fn syntax(&self) -> Option<&str> {
        self.payload.syntax()
    }

    /// Problem encountered while preparing the evaluated value, such as a
    /// failed transform.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&Error> {
        self.diagnostic.as_ref()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}{}: {} (actual: {})",
            self.field.name(),
            self.rule,
            self.payload,
            self.status,
            self.field.presentation_value()
        )
    }
}
