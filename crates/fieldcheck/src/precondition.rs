//! Guards gating a condition
//!
//! A [`PreCondition`] runs a guard on one field and bridges to a
//! [`Condition`] on another. When the guard's status is `Failed` or
//! `NullValueOperation`, every rule on the bridged condition resolves to
//! [`Status::PreConditionNotMet`](crate::Status::PreConditionNotMet) without
//! evaluating its predicate.
//!
//! Running several guards keeps only the last result.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use fieldcheck::{Status, ValidationResult, Validator};
//!
//! let seen = RefCell::new(Vec::new());
//! let validator = Validator::new(|result: &ValidationResult| {
//!     seen.borrow_mut().push(result.status());
//! });
//!
//! validator
//!     .if_value_of_field("Country", "NL")
//!     .is_one_of(["NL", "BE"])
//!     .then_value_of_field_with("Postcode", Some("12x"), |code: &str| code.parse::<i64>())
//!     .should_be_greater_than(999);
//!
//! // The transform failed, so the value became null.
//! assert_eq!(*seen.borrow(), [Status::NullValueOperation]);
//! ```

use std::fmt;

use crate::condition::Condition;
use crate::foundation::{Error, FieldValue, Status, Value};
use crate::guards::Guard;
use crate::listener::ValidationListener;
use crate::report::PreResult;
use crate::resolver;
use crate::rules::Domain;
use crate::validator::Validator;

/// A field a guard is evaluated on.
pub struct PreCondition<'v, L> {
    validator: &'v Validator<L>,
    field: FieldValue,
    result: Option<PreResult>,
}

impl<'v, L: ValidationListener> PreCondition<'v, L> {
    pub(crate) fn new(validator: &'v Validator<L>, field: FieldValue) -> Self {
        Self {
            validator,
            field,
            result: None,
        }
    }

    #[must_use]
    pub fn field(&self) -> &FieldValue {
        &self.field
    }

    /// Result of the last guard, if one ran.
    #[must_use]
    pub fn result(&self) -> Option<&PreResult> {
        self.result.as_ref()
    }

    /// Status of the last guard, if one ran.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.result.as_ref().map(PreResult::status)
    }

    /// Evaluates `guard` without storing the result.
    pub fn evaluate(&self, guard: Guard) -> PreResult {
        let kind = guard.kind();
        let status = resolver::resolve(
            None,
            self.field.value(),
            guard.gate(),
            guard.capability(),
            |value| guard.evaluate(value, self.validator.probe()),
        );

        tracing::debug!(
            field = self.field.name(),
            guard = kind.as_str(),
            %status,
            "guard evaluated"
        );

        PreResult::new(kind, status, self.field.clone(), guard.into_payload())
    }

    /// Evaluates `guard` and keeps its result for the bridged condition.
    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn guard(mut self, guard: Guard) -> Self {
        self.result = Some(self.evaluate(guard));
        self
    }

    // ========================================================================
    // GUARDS
    // ========================================================================

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is(self, value: impl Into<Value>) -> Self {
        self.guard(Guard::Is(value.into()))
    }

    /// Text equality ignoring case. Non-text values resolve to
    /// `IncompatibleType`.
    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_in_any_case(self, value: impl Into<String>) -> Self {
        self.guard(Guard::IsInAnyCase(value.into()))
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_not(self, value: impl Into<Value>) -> Self {
        self.guard(Guard::IsNot(value.into()))
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_not_in_any_case(self, value: impl Into<String>) -> Self {
        self.guard(Guard::IsNotInAnyCase(value.into()))
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_null(self) -> Self {
        self.guard(Guard::IsNull)
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_not_null(self) -> Self {
        self.guard(Guard::IsNotNull)
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_blank(self) -> Self {
        self.guard(Guard::IsBlank)
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_not_blank(self) -> Self {
        self.guard(Guard::IsNotBlank)
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_numeric(self) -> Self {
        self.guard(Guard::IsNumeric)
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_boolean(self) -> Self {
        self.guard(Guard::IsBoolean)
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_greater_than(self, value: impl Into<Value>) -> Self {
        self.guard(Guard::IsGreaterThan(value.into()))
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_less_than(self, value: impl Into<Value>) -> Self {
        self.guard(Guard::IsLessThan(value.into()))
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_in_inclusive_range(self, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        self.guard(Guard::IsInInclusiveRange {
            from: from.into(),
            to: to.into(),
        })
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_in_exclusive_range(self, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        self.guard(Guard::IsInExclusiveRange {
            from: from.into(),
            to: to.into(),
        })
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_one_of(self, domain: impl Into<Domain>) -> Self {
        self.guard(Guard::IsOneOf(domain.into()))
    }

    #[must_use = "a guard only takes effect through then_value_of_field"]
    pub fn is_an_existing_file(self) -> Self {
        self.guard(Guard::IsAnExistingFile)
    }

    // ========================================================================
    // BRIDGE
    // ========================================================================

    /// Starts a condition on `name`, gated by the last guard.
    pub fn then_value_of_field(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Condition<'v, L> {
        Condition::new(self.validator, FieldValue::new(name, value), self.result, None)
    }

    /// Starts a condition on `name` whose value is produced by `transform`.
    ///
    /// `transform` only runs for `Some` input. When it fails, the value
    /// becomes null, so rules resolve to `NullValueOperation`, and every
    /// result of the condition carries an [`Error::Transform`] diagnostic.
    pub fn then_value_of_field_with<T, U, E, F>(
        self,
        name: impl Into<String>,
        value: Option<T>,
        transform: F,
    ) -> Condition<'v, L>
    where
        U: Into<Value>,
        E: fmt::Display,
        F: FnOnce(T) -> Result<U, E>,
    {
        let name = name.into();
        let (value, diagnostic) = match value.map(transform) {
            None => (Value::Null, None),
            Some(Ok(produced)) => (produced.into(), None),
            Some(Err(error)) => {
                tracing::warn!(field = %name, %error, "transform failed, value treated as null");
                (Value::Null, Some(Error::transform(name.as_str(), error.to_string())))
            }
        };

        Condition::new(
            self.validator,
            FieldValue::new(name, value),
            self.result,
            diagnostic,
        )
    }
}

impl<L> fmt::Debug for PreCondition<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreCondition")
            .field("field", &self.field)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
