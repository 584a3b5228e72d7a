//! Result sinks
//!
//! A [`ValidationListener`] receives one [`ValidationResult`] per terminal
//! rule, synchronously and on the caller's thread. Listeners take `&self`;
//! sinks that accumulate results use interior mutability.
//!
//! Closures implement the trait, so collecting results needs no extra type:
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
//! validator.value_of_field("Name", "pater").should_not_be_blank();
//! validator.value_of_field("Address", "").should_not_be_blank();
//!
//! assert_eq!(*seen.borrow(), [Status::Passed, Status::Failed]);
//! ```

use crate::report::ValidationResult;

/// Receives validation results.
pub trait ValidationListener {
    fn on_validated(&self, result: &ValidationResult);
}

/// Discards every result. Useful with [`Condition::check`](crate::Condition::check),
/// which returns results directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl ValidationListener for NoopListener {
    fn on_validated(&self, _result: &ValidationResult) {}
}

impl<F> ValidationListener for F
where
    F: Fn(&ValidationResult),
{
    fn on_validated(&self, result: &ValidationResult) {
        self(result);
    }
}

/// Emits every result as a `tracing` event: `info` when the rule passed,
/// `warn` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl ValidationListener for TracingListener {
    fn on_validated(&self, result: &ValidationResult) {
        let field = result.field_name();
        let rule = result.kind().as_str();
        let status = result.status().as_str();

        if result.is_passed() {
            tracing::info!(field, rule, status, "validation passed");
        } else {
            tracing::warn!(
                field,
                rule,
                status,
                actual = %result.presentation_value(),
                "validation did not pass"
            );
        }
    }
}
