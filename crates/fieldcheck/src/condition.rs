//! Terminal rules on a field
//!
//! A [`Condition`] is a field value, optionally preceded by the result of a
//! guard. Every terminal method evaluates one [`Rule`], reports the
//! [`ValidationResult`] to the validator's listener and hands the condition
//! back so further rules can be chained.
//!
//! [`Condition::check`] evaluates a rule without reporting it and returns
//! the result instead.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{NoopListener, Pattern, Rule, Status, Validator};
//!
//! let validator = Validator::new(NoopListener);
//! let code = Pattern::new(r"^[A-Z]\d+$", "A-Z followed by digits").unwrap();
//!
//! let passed = validator.value_of_field("Code", "A20").check(Rule::Match(code.clone()));
//! let failed = validator.value_of_field("Code", "a20").check(Rule::Match(code));
//!
//! assert_eq!(passed.status(), Status::Passed);
//! assert_eq!(failed.status(), Status::Failed);
//! assert_eq!(failed.syntax(), Some("A-Z followed by digits"));
//! ```

use crate::foundation::{Error, FieldValue, Value};
use crate::listener::ValidationListener;
use crate::report::{PreResult, ValidationResult};
use crate::resolver;
use crate::rules::{Domain, NamedDomain, Pattern, Rule};
use crate::validator::Validator;

/// A field under validation.
pub struct Condition<'v, L> {
    validator: &'v Validator<L>,
    field: FieldValue,
    pre_result: Option<PreResult>,
    diagnostic: Option<Error>,
}

impl<'v, L: ValidationListener> Condition<'v, L> {
    pub(crate) fn new(
        validator: &'v Validator<L>,
        field: FieldValue,
        pre_result: Option<PreResult>,
        diagnostic: Option<Error>,
    ) -> Self {
        Self {
            validator,
            field,
            pre_result,
            diagnostic,
        }
    }

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

    /// The guard result gating this condition, if it was bridged from a
    /// precondition that ran a guard.
    #[must_use]
    pub fn pre_result(&self) -> Option<&PreResult> {
        self.pre_result.as_ref()
    }

    /// Problem encountered while preparing the value, such as a failed
    /// transform.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&Error> {
        self.diagnostic.as_ref()
    }

    /// Attaches the value to show to users in place of the evaluated one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_original_value(mut self, original: impl Into<Value>) -> Self {
        self.field = self.field.with_original(original);
        self
    }

    // ========================================================================
    // EVALUATION
    // ========================================================================

    /// Evaluates `rule` and returns the result without reporting it.
    pub fn check(&self, rule: Rule) -> ValidationResult {
        let kind = rule.kind();
        let status = resolver::resolve(
            self.pre_result.as_ref().map(PreResult::status),
            self.field.value(),
            rule.gate(),
            rule.capability(),
            |value| rule.evaluate(value, self.validator.probe()),
        );

        tracing::debug!(
            field = self.field.name(),
            rule = kind.as_str(),
            %status,
            "rule evaluated"
        );

        ValidationResult::new(
            kind,
            status,
            self.field.clone(),
            self.pre_result.clone(),
            rule.into_payload(),
            self.diagnostic.clone(),
        )
    }

    /// Evaluates `rule` and reports the result to the listener.
    pub fn apply(self, rule: Rule) -> Self {
        let result = self.check(rule);
        self.validator.report(&result);
        self
    }

    /// Fluent continuation; does nothing.
    pub fn and(self) -> Self {
        self
    }

    // ========================================================================
    // RULES
    // ========================================================================

    pub fn should_be(self, value: impl Into<Value>) -> Self {
        self.apply(Rule::Be(value.into()))
    }

    pub fn should_not_be(self, value: impl Into<Value>) -> Self {
        self.apply(Rule::NotBe(value.into()))
    }

    /// Passes when the value is null. Ignores any preceding guard.
    pub fn should_be_null(self) -> Self {
        self.apply(Rule::BeNull)
    }

    /// Passes when the value is not null. Ignores any preceding guard.
    pub fn should_not_be_null(self) -> Self {
        self.apply(Rule::NotBeNull)
    }

    /// Passes when the value is null or whitespace-only text.
    pub fn should_be_blank(self) -> Self {
        self.apply(Rule::BeBlank)
    }

    pub fn should_not_be_blank(self) -> Self {
        self.apply(Rule::NotBeBlank)
    }

    /// Passes for integers and for text made of an optional sign and digits.
    pub fn should_be_numeric(self) -> Self {
        self.apply(Rule::BeNumeric)
    }

    /// Passes for booleans and for the text `true` / `false` in any case.
    pub fn should_be_boolean(self) -> Self {
        self.apply(Rule::BeBoolean)
    }

    pub fn should_be_greater_than(self, value: impl Into<Value>) -> Self {
        self.apply(Rule::GreaterThan(value.into()))
    }

    pub fn should_be_less_than(self, value: impl Into<Value>) -> Self {
        self.apply(Rule::LessThan(value.into()))
    }

    /// Compares against another field; the result records that field's name.
    pub fn should_be_greater_than_field(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.apply(Rule::GreaterThanField(FieldValue::new(name, value)))
    }

    /// Like [`should_be_greater_than_field`](Self::should_be_greater_than_field),
    /// also recording the other field's original value for display.
    pub fn should_be_greater_than_field_with_original(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        original: impl Into<Value>,
    ) -> Self {
        let other = FieldValue::new(name, value).with_original(original);
        self.apply(Rule::GreaterThanField(other))
    }

    pub fn should_be_less_than_field(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.apply(Rule::LessThanField(FieldValue::new(name, value)))
    }

    pub fn should_be_less_than_field_with_original(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        original: impl Into<Value>,
    ) -> Self {
        let other = FieldValue::new(name, value).with_original(original);
        self.apply(Rule::LessThanField(other))
    }

    /// `from <= value <= to`.
    pub fn should_be_in_inclusive_range(
        self,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        self.apply(Rule::InInclusiveRange {
            from: from.into(),
            to: to.into(),
        })
    }

    /// `from < value < to`.
    pub fn should_be_in_exclusive_range(
        self,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        self.apply(Rule::InExclusiveRange {
            from: from.into(),
            to: to.into(),
        })
    }

    pub fn should_be_one_of(self, domain: impl Into<Domain>) -> Self {
        self.apply(Rule::OneOf(domain.into()))
    }

    /// Membership comparing display forms without regard to case.
    pub fn should_be_one_of_in_any_case(self, domain: impl Into<Domain>) -> Self {
        self.apply(Rule::OneOfInAnyCase(domain.into()))
    }

    /// Membership in the tokens of a [`NamedDomain`].
    pub fn should_be_one_of_domain<D: NamedDomain>(self) -> Self {
        self.apply(Rule::OneOf(Domain::of::<D>()))
    }

    pub fn should_be_one_of_domain_in_any_case<D: NamedDomain>(self) -> Self {
        self.apply(Rule::OneOfInAnyCase(Domain::of::<D>()))
    }

    /// Passes when the value's display form matches `pattern` entirely.
    pub fn should_match(self, pattern: &Pattern) -> Self {
        self.apply(Rule::Match(pattern.clone()))
    }

    /// Passes when the text value names an existing file, according to the
    /// validator's probe.
    pub fn should_be_an_existing_file(self) -> Self {
        self.apply(Rule::AnExistingFile)
    }
}

impl<L> std::fmt::Debug for Condition<'_, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Condition")
            .field("field", &self.field)
            .field("pre_result", &self.pre_result)
            .field("diagnostic", &self.diagnostic)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Status;
    use crate::listener::NoopListener;
    use crate::rules::RuleKind;
    use std::cell::RefCell;

    #[test]
    fn test_chained_rules_each_report_once() {
        let seen = RefCell::new(Vec::new());
        let validator = Validator::new(|result: &ValidationResult| {
            seen.borrow_mut().push((result.kind(), result.status()));
        });

        validator
            .value_of_field("Age", 30)
            .should_not_be_null()
            .and()
            .should_be_greater_than(18)
            .and()
            .should_be_less_than(30);

        assert_eq!(
            *seen.borrow(),
            [
                (RuleKind::ShouldNotBeNull, Status::Passed),
                (RuleKind::ShouldBeGreaterThan, Status::Passed),
                (RuleKind::ShouldBeLessThan, Status::Failed),
            ]
        );
    }

    #[test]
    fn test_check_does_not_report() {
        let seen = RefCell::new(0);
        let validator = Validator::new(|_: &ValidationResult| *seen.borrow_mut() += 1);

        let result = validator.value_of_field("Age", 30).check(Rule::BeNumeric);

        assert_eq!(result.status(), Status::Passed);
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn test_result_snapshots_field() {
        let validator = Validator::new(NoopListener);
        let result = validator
            .value_of_field("Salary", 20_000)
            .with_original_value("20,000")
            .check(Rule::GreaterThan(Value::from(20_000)));

        assert_eq!(result.field_name(), "Salary");
        assert_eq!(result.field_value(), &Value::from(20_000));
        assert_eq!(result.presentation_value(), &Value::from("20,000"));
        assert_eq!(result.status(), Status::Failed);
    }

    #[test]
    fn test_debug_omits_validator() {
        let validator = Validator::new(NoopListener);
        let condition = validator.value_of_field("Name", "x");
        let debug = format!("{condition:?}");
        assert!(debug.starts_with("Condition { field: FieldValue"));
    }
}
