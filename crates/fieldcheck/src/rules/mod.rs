//! Terminal rule catalogue
//!
//! A [`Rule`] is a terminal predicate on a condition's field. Each rule
//! knows its [`RuleKind`], which resolution steps it goes through and which
//! payload it reports.
//!
//! | Rule | Holds when |
//! |---|---|
//! | [`Rule::Be`] / [`Rule::NotBe`] | value equals / differs from the operand |
//! | [`Rule::BeNull`] / [`Rule::NotBeNull`] | value is / is not null |
//! | [`Rule::BeBlank`] / [`Rule::NotBeBlank`] | value is / is not null or whitespace-only text |
//! | [`Rule::BeNumeric`] | integer, or text `[+-]?[0-9]+` |
//! | [`Rule::BeBoolean`] | boolean, or text `true`/`false` in any case |
//! | [`Rule::GreaterThan`] / [`Rule::LessThan`] | strict ordering against the operand |
//! | [`Rule::GreaterThanField`] / [`Rule::LessThanField`] | strict ordering against another field |
//! | [`Rule::InInclusiveRange`] | `from <= value <= to` |
//! | [`Rule::InExclusiveRange`] | `from < value < to` |
//! | [`Rule::OneOf`] / [`Rule::OneOfInAnyCase`] | membership in a [`Domain`] |
//! | [`Rule::Match`] | the value's display form fully matches a [`Pattern`] |
//! | [`Rule::AnExistingFile`] | the text value names an existing file |

mod domain;
mod pattern;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

pub use domain::{Domain, NamedDomain};
pub use pattern::Pattern;

use crate::foundation::{FieldValue, Status, Value};
use crate::probe::FileProbe;
use crate::report::Payload;
use crate::resolver::{self, Capability, Gate};

// ============================================================================
// RULE KIND
// ============================================================================

/// Identifies which rule produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ShouldBe,
    ShouldNotBe,
    ShouldBeNull,
    ShouldNotBeNull,
    ShouldBeBlank,
    ShouldNotBeBlank,
    ShouldBeNumeric,
    ShouldBeBoolean,
    ShouldBeGreaterThan,
    ShouldBeLessThan,
    ShouldBeGreaterThanField,
    ShouldBeLessThanField,
    ShouldBeInInclusiveRange,
    ShouldBeInExclusiveRange,
    ShouldBeOneOf,
    ShouldBeOneOfInAnyCase,
    ShouldMatch,
    ShouldBeAnExistingFile,
}

impl RuleKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShouldBe => "should_be",
            Self::ShouldNotBe => "should_not_be",
            Self::ShouldBeNull => "should_be_null",
            Self::ShouldNotBeNull => "should_not_be_null",
            Self::ShouldBeBlank => "should_be_blank",
            Self::ShouldNotBeBlank => "should_not_be_blank",
            Self::ShouldBeNumeric => "should_be_numeric",
            Self::ShouldBeBoolean => "should_be_boolean",
            Self::ShouldBeGreaterThan => "should_be_greater_than",
            Self::ShouldBeLessThan => "should_be_less_than",
            Self::ShouldBeGreaterThanField => "should_be_greater_than_field",
            Self::ShouldBeLessThanField => "should_be_less_than_field",
            Self::ShouldBeInInclusiveRange => "should_be_in_inclusive_range",
            Self::ShouldBeInExclusiveRange => "should_be_in_exclusive_range",
            Self::ShouldBeOneOf => "should_be_one_of",
            Self::ShouldBeOneOfInAnyCase => "should_be_one_of_in_any_case",
            Self::ShouldMatch => "should_match",
            Self::ShouldBeAnExistingFile => "should_be_an_existing_file",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A terminal rule together with its operands.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Rule {
    Be(Value),
    NotBe(Value),
    BeNull,
    NotBeNull,
    BeBlank,
    NotBeBlank,
    BeNumeric,
    BeBoolean,
    GreaterThan(Value),
    LessThan(Value),
    /// Strictly greater than another field's value.
    GreaterThanField(FieldValue),
    /// Strictly less than another field's value.
    LessThanField(FieldValue),
    InInclusiveRange { from: Value, to: Value },
    InExclusiveRange { from: Value, to: Value },
    OneOf(Domain),
    OneOfInAnyCase(Domain),
    Match(Pattern),
    AnExistingFile,
}

impl Rule {
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Be(_) => RuleKind::ShouldBe,
            Self::NotBe(_) => RuleKind::ShouldNotBe,
            Self::BeNull => RuleKind::ShouldBeNull,
            Self::NotBeNull => RuleKind::ShouldNotBeNull,
            Self::BeBlank => RuleKind::ShouldBeBlank,
            Self::NotBeBlank => RuleKind::ShouldNotBeBlank,
            Self::BeNumeric => RuleKind::ShouldBeNumeric,
            Self::BeBoolean => RuleKind::ShouldBeBoolean,
            Self::GreaterThan(_) => RuleKind::ShouldBeGreaterThan,
            Self::LessThan(_) => RuleKind::ShouldBeLessThan,
            Self::GreaterThanField(_) => RuleKind::ShouldBeGreaterThanField,
            Self::LessThanField(_) => RuleKind::ShouldBeLessThanField,
            Self::InInclusiveRange { .. } => RuleKind::ShouldBeInInclusiveRange,
            Self::InExclusiveRange { .. } => RuleKind::ShouldBeInExclusiveRange,
            Self::OneOf(_) => RuleKind::ShouldBeOneOf,
            Self::OneOfInAnyCase(_) => RuleKind::ShouldBeOneOfInAnyCase,
            Self::Match(_) => RuleKind::ShouldMatch,
            Self::AnExistingFile => RuleKind::ShouldBeAnExistingFile,
        }
    }

    // Null identity rules ignore guards entirely; blank rules still honour
    // them. Keep this asymmetry.
    pub(crate) const fn gate(&self) -> Gate {
        match self {
            Self::BeNull | Self::NotBeNull => Gate::Open,
            Self::BeBlank | Self::NotBeBlank => Gate::PreResultOnly,
            _ => Gate::Full,
        }
    }

    pub(crate) const fn capability(&self) -> Capability {
        match self {
            Self::GreaterThan(_)
            | Self::LessThan(_)
            | Self::GreaterThanField(_)
            | Self::LessThanField(_)
            | Self::InInclusiveRange { .. }
            | Self::InExclusiveRange { .. } => Capability::Ordering,
            Self::AnExistingFile => Capability::Text,
            _ => Capability::Any,
        }
    }

    /// Runs the predicate on a value that already went through the gate.
    pub(crate) fn evaluate(&self, value: &Value, probe: &dyn FileProbe) -> Status {
        match self {
            Self::Be(expected) => Status::from_bool(value == expected),
            Self::NotBe(expected) => Status::from_bool(value != expected),
            Self::BeNull => Status::from_bool(value.is_null()),
            Self::NotBeNull => Status::from_bool(!value.is_null()),
            Self::BeBlank => Status::from_bool(value.is_blank()),
            Self::NotBeBlank => Status::from_bool(!value.is_blank()),
            Self::BeNumeric => Status::from_bool(resolver::is_numeric(value)),
            Self::BeBoolean => Status::from_bool(resolver::is_boolean(value)),
            Self::GreaterThan(bound) => resolver::ordering(value, bound, Ordering::is_gt),
            Self::LessThan(bound) => resolver::ordering(value, bound, Ordering::is_lt),
            Self::GreaterThanField(other) => {
                resolver::ordering(value, other.value(), Ordering::is_gt)
            }
            Self::LessThanField(other) => resolver::ordering(value, other.value(), Ordering::is_lt),
            Self::InInclusiveRange { from, to } => resolver::within(value, from, to, true),
            Self::InExclusiveRange { from, to } => resolver::within(value, from, to, false),
            Self::OneOf(domain) => resolver::one_of(value, domain, false),
            Self::OneOfInAnyCase(domain) => resolver::one_of(value, domain, true),
            Self::Match(pattern) => Status::from_bool(pattern.is_full_match(&value.to_string())),
            Self::AnExistingFile => resolver::existing_file(value, probe),
        }
    }

    pub(crate) fn into_payload(self) -> Payload {
        match self {
            Self::Be(value)
            | Self::NotBe(value)
            | Self::GreaterThan(value)
            | Self::LessThan(value) => Payload::Compared { value },
            Self::GreaterThanField(field) | Self::LessThanField(field) => {
                Payload::ComparedField(field)
            }
            Self::InInclusiveRange { from, to } | Self::InExclusiveRange { from, to } => {
                Payload::Range { from, to }
            }
            Self::OneOf(domain) | Self::OneOfInAnyCase(domain) => Payload::Domain(domain),
            Self::Match(pattern) => Payload::Syntax {
                pattern: pattern.as_str().to_owned(),
                description: pattern.description().to_owned(),
            },
            Self::BeNull
            | Self::NotBeNull
            | Self::BeBlank
            | Self::NotBeBlank
            | Self::BeNumeric
            | Self::BeBoolean
            | Self::AnExistingFile => Payload::None,
        }
    }
}
