//! Validation context
//!
//! A [`Validator`] owns the listener results are reported to and the probe
//! used for filesystem rules. It is the entry point for building
//! [`Condition`]s and [`PreCondition`]s.
//!
//! The validator is not mutated while conditions evaluate: every condition
//! borrows it shared, and replacing the listener needs `&mut`. A validator
//! whose listener is `Sync` can be shared between threads as is.

use std::fmt;
use std::sync::Arc;

use crate::condition::Condition;
use crate::foundation::{FieldValue, Value};
use crate::listener::{NoopListener, ValidationListener};
use crate::precondition::PreCondition;
use crate::probe::{self, FileProbe};
use crate::report::ValidationResult;

/// Entry point of the validation engine.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use fieldcheck::{Status, ValidationResult, Validator};
///
/// let seen = RefCell::new(Vec::new());
/// let validator = Validator::new(|result: &ValidationResult| {
///     seen.borrow_mut().push((result.field_name().to_owned(), result.status()));
/// });
///
/// validator.value_of_field("Age", 45).should_be_in_inclusive_range(21, 50);
/// validator
///     .if_value_of_field("Sex", "male")
///     .is("female")
///     .then_value_of_field("Age", 45)
///     .should_be_less_than(40);
///
/// assert_eq!(
///     *seen.borrow(),
///     [
///         ("Age".to_owned(), Status::Passed),
///         ("Age".to_owned(), Status::PreConditionNotMet),
///     ]
/// );
/// ```
pub struct Validator<L = NoopListener> {
    listener: L,
    probe: Arc<dyn FileProbe>,
}

impl<L> Validator<L> {
    /// Creates a validator reporting to `listener`.
    ///
    /// With the `fs` feature the filesystem probe is [`FsProbe`](crate::FsProbe);
    /// otherwise every file lookup fails until a probe is injected.
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            probe: probe::default_probe(),
        }
    }

    /// Replaces the filesystem probe.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Shares an existing probe.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_shared_probe(mut self, probe: Arc<dyn FileProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Swaps the listener for one of another type, keeping the probe.
    pub fn with_listener<M>(self, listener: M) -> Validator<M> {
        Validator {
            listener,
            probe: self.probe,
        }
    }

    /// The listener results are reported to.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Replaces the listener and returns the previous one.
    pub fn set_listener(&mut self, listener: L) -> L {
        std::mem::replace(&mut self.listener, listener)
    }

    pub(crate) fn probe(&self) -> &dyn FileProbe {
        self.probe.as_ref()
    }
}

impl<L: ValidationListener> Validator<L> {
    /// Starts a condition on a field.
    pub fn value_of_field(
        &self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Condition<'_, L> {
        Condition::new(self, FieldValue::new(name, value), None, None)
    }

    /// Starts a condition on a field whose evaluated value differs from what
    /// should be shown to a user.
    pub fn value_of_field_with_original(
        &self,
        name: impl Into<String>,
        value: impl Into<Value>,
        original: impl Into<Value>,
    ) -> Condition<'_, L> {
        let field = FieldValue::new(name, value).with_original(original);
        Condition::new(self, field, None, None)
    }

    /// Starts a precondition on a field.
    pub fn if_value_of_field(
        &self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> PreCondition<'_, L> {
        PreCondition::new(self, FieldValue::new(name, value))
    }

    /// Reports whether a mandatory field is filled in, i.e. not blank.
    pub fn mandate_field(&self, name: impl Into<String>, value: impl Into<Value>) -> &Self {
        self.value_of_field(name, value).should_not_be_blank();
        self
    }

    pub(crate) fn report(&self, result: &ValidationResult) {
        self.listener.on_validated(result);
    }
}

impl<L: Default> Default for Validator<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: fmt::Debug> fmt::Debug for Validator<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Status;
    use crate::probe::KnownPaths;
    use std::cell::RefCell;

    #[test]
    fn test_mandate_field_reports_blank_values() {
        let seen = RefCell::new(Vec::new());
        let validator = Validator::new(|result: &ValidationResult| {
            seen.borrow_mut().push(result.status());
        });

        validator
            .mandate_field("Name", "pater")
            .mandate_field("Address", "  ")
            .mandate_field("Phone", None::<&str>);

        assert_eq!(
            *seen.borrow(),
            [Status::Passed, Status::Failed, Status::Failed]
        );
    }

    #[test]
    fn test_set_listener_returns_previous() {
        let mut validator = Validator::new(1_u8);
        assert_eq!(validator.set_listener(2), 1);
        assert_eq!(*validator.listener(), 2);
    }

    #[test]
    fn test_with_listener_keeps_probe() {
        let validator = Validator::new(NoopListener)
            .with_probe(KnownPaths::from_iter(["/in.csv"]))
            .with_listener(NoopListener);
        let result = validator
            .value_of_field("Input", "/in.csv")
            .should_be_an_existing_file()
            .check(crate::rules::Rule::AnExistingFile);
        assert_eq!(result.status(), Status::Passed);
    }

    #[test]
    fn test_original_value_is_kept() {
        let validator = Validator::<NoopListener>::default();
        let condition = validator.value_of_field_with_original("Salary", 20_000, "20,000");
        assert_eq!(condition.field().presentation_value(), &Value::from("20,000"));
    }
}
