//! Precondition guard catalogue
//!
//! Guards are the predicates a [`PreCondition`](crate::PreCondition) can
//! hold. They never see a preceding guard, so only null substitution and
//! capability checks apply before the predicate.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::foundation::{Status, Value};
use crate::probe::FileProbe;
use crate::report::Payload;
use crate::resolver::{self, Capability, Gate};
use crate::rules::Domain;

/// Identifies which guard produced a pre-result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardKind {
    Is,
    IsInAnyCase,
    IsNot,
    IsNotInAnyCase,
    IsNull,
    IsNotNull,
    IsBlank,
    IsNotBlank,
    IsNumeric,
    IsBoolean,
    IsGreaterThan,
    IsLessThan,
    IsInInclusiveRange,
    IsInExclusiveRange,
    IsOneOf,
    IsAnExistingFile,
}

impl GuardKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsInAnyCase => "is_in_any_case",
            Self::IsNot => "is_not",
            Self::IsNotInAnyCase => "is_not_in_any_case",
            Self::IsNull => "is_null",
            Self::IsNotNull => "is_not_null",
            Self::IsBlank => "is_blank",
            Self::IsNotBlank => "is_not_blank",
            Self::IsNumeric => "is_numeric",
            Self::IsBoolean => "is_boolean",
            Self::IsGreaterThan => "is_greater_than",
            Self::IsLessThan => "is_less_than",
            Self::IsInInclusiveRange => "is_in_inclusive_range",
            Self::IsInExclusiveRange => "is_in_exclusive_range",
            Self::IsOneOf => "is_one_of",
            Self::IsAnExistingFile => "is_an_existing_file",
        }
    }
}

impl fmt::Display for GuardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guard predicate together with its operands.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Guard {
    Is(Value),
    IsInAnyCase(String),
    IsNot(Value),
    IsNotInAnyCase(String),
    IsNull,
    IsNotNull,
    IsBlank,
    IsNotBlank,
    IsNumeric,
    IsBoolean,
    IsGreaterThan(Value),
    IsLessThan(Value),
    IsInInclusiveRange { from: Value, to: Value },
    IsInExclusiveRange { from: Value, to: Value },
    IsOneOf(Domain),
    IsAnExistingFile,
}

impl Guard {
    #[must_use]
    pub const fn kind(&self) -> GuardKind {
        match self {
            Self::Is(_) => GuardKind::Is,
            Self::IsInAnyCase(_) => GuardKind::IsInAnyCase,
            Self::IsNot(_) => GuardKind::IsNot,
            Self::IsNotInAnyCase(_) => GuardKind::IsNotInAnyCase,
            Self::IsNull => GuardKind::IsNull,
            Self::IsNotNull => GuardKind::IsNotNull,
            Self::IsBlank => GuardKind::IsBlank,
            Self::IsNotBlank => GuardKind::IsNotBlank,
            Self::IsNumeric => GuardKind::IsNumeric,
            Self::IsBoolean => GuardKind::IsBoolean,
            Self::IsGreaterThan(_) => GuardKind::IsGreaterThan,
            Self::IsLessThan(_) => GuardKind::IsLessThan,
            Self::IsInInclusiveRange { .. } => GuardKind::IsInInclusiveRange,
            Self::IsInExclusiveRange { .. } => GuardKind::IsInExclusiveRange,
            Self::IsOneOf(_) => GuardKind::IsOneOf,
            Self::IsAnExistingFile => GuardKind::IsAnExistingFile,
        }
    }

    // Identity and type-test guards look at the raw value: a null value is
    // simply not numeric.
    pub(crate) const fn gate(&self) -> Gate {
        match self {
            Self::IsNull
            | Self::IsNotNull
            | Self::IsBlank
            | Self::IsNotBlank
            | Self::IsNumeric
            | Self::IsBoolean => Gate::Open,
            _ => Gate::Full,
        }
    }

    pub(crate) const fn capability(&self) -> Capability {
        match self {
            Self::IsGreaterThan(_)
            | Self::IsLessThan(_)
            | Self::IsInInclusiveRange { .. }
            | Self::IsInExclusiveRange { .. } => Capability::Ordering,
            Self::IsInAnyCase(_) | Self::IsNotInAnyCase(_) | Self::IsAnExistingFile => {
                Capability::Text
            }
            _ => Capability::Any,
        }
    }

    pub(crate) fn evaluate(&self, value: &Value, probe: &dyn FileProbe) -> Status {
        match self {
            Self::Is(expected) => Status::from_bool(value == expected),
            Self::IsInAnyCase(expected) => resolver::text_eq_ignore_case(value, expected),
            Self::IsNot(expected) => Status::from_bool(value != expected),
            Self::IsNotInAnyCase(expected) => {
                Status::from_bool(!resolver::text_eq_ignore_case(value, expected).is_passed())
            }
            Self::IsNull => Status::from_bool(value.is_null()),
            Self::IsNotNull => Status::from_bool(!value.is_null()),
            Self::IsBlank => Status::from_bool(value.is_blank()),
            Self::IsNotBlank => Status::from_bool(!value.is_blank()),
            Self::IsNumeric => Status::from_bool(resolver::is_numeric(value)),
            Self::IsBoolean => Status::from_bool(resolver::is_boolean(value)),
            Self::IsGreaterThan(bound) => resolver::ordering(value, bound, Ordering::is_gt),
            Self::IsLessThan(bound) => resolver::ordering(value, bound, Ordering::is_lt),
            Self::IsInInclusiveRange { from, to } => resolver::within(value, from, to, true),
            Self::IsInExclusiveRange { from, to } => resolver::within(value, from, to, false),
            Self::IsOneOf(domain) => resolver::one_of(value, domain, false),
            Self::IsAnExistingFile => resolver::existing_file(value, probe),
        }
    }

    pub(crate) fn into_payload(self) -> Payload {
        match self {
            Self::Is(value)
            | Self::IsNot(value)
            | Self::IsGreaterThan(value)
            | Self::IsLessThan(value) => Payload::Compared { value },
            Self::IsInAnyCase(text) | Self::IsNotInAnyCase(text) => Payload::Compared {
                value: Value::Text(text),
            },
            Self::IsInInclusiveRange { from, to } | Self::IsInExclusiveRange { from, to } => {
                Payload::Range { from, to }
            }
            Self::IsOneOf(domain) => Payload::Domain(domain),
            Self::IsNull
            | Self::IsNotNull
            | Self::IsBlank
            | Self::IsNotBlank
            | Self::IsNumeric
            | Self::IsBoolean
            | Self::IsAnExistingFile => Payload::None,
        }
    }
}
