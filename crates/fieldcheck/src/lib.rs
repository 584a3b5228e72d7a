//! # fieldcheck
//!
//! A field-level validation engine. Callers assert rules against named
//! values, optionally gated by a guard on another field, and every outcome
//! is reported to a single listener as a structured [`ValidationResult`].
//!
//! ## Quick Start
//!
//! ```
//! use std::cell::RefCell;
//! use fieldcheck::prelude::*;
//!
//! let seen = RefCell::new(Vec::new());
//! let validator = Validator::new(|result: &ValidationResult| {
//!     seen.borrow_mut().push(result.to_string());
//! });
//!
//! validator.value_of_field("Age", 17).should_be_greater_than(18);
//! validator
//!     .if_value_of_field("Sex", "male")
//!     .is("female")
//!     .then_value_of_field("Age", 40)
//!     .should_be_less_than(40);
//!
//! assert_eq!(
//!     *seen.borrow(),
//!     [
//!         "Age should_be_greater_than 18: Failed (actual: 17)",
//!         "Age should_be_less_than 40: PreConditionNotMet (actual: 40)",
//!     ]
//! );
//! ```
//!
//! ## Status Resolution
//!
//! Every rule resolves to exactly one [`Status`], applying in order:
//! precondition short-circuit, null/blank substitution, capability check,
//! predicate. The null and blank rules skip some of these steps; see
//! [`Rule`] for the exact gates.
//!
//! ## Features
//!
//! - **`fs`** (default): [`FsProbe`] backs file-existence rules with the
//!   real filesystem. Without it, a probe must be injected with
//!   [`Validator::with_probe`].

mod condition;
pub mod foundation;
pub mod guards;
mod listener;
mod precondition;
pub mod prelude;
mod probe;
mod report;
mod resolver;
pub mod rules;
mod validator;

pub use condition::Condition;
pub use foundation::{Category, Error, FieldValue, Status, Value};
pub use guards::{Guard, GuardKind};
pub use listener::{NoopListener, TracingListener, ValidationListener};
pub use precondition::PreCondition;
#[cfg(feature = "fs")]
pub use probe::FsProbe;
pub use probe::{FileProbe, KnownPaths, NoFilesystem};
pub use report::{Payload, PreResult, ValidationResult};
pub use rules::{Domain, NamedDomain, Pattern, Rule, RuleKind};
pub use validator::Validator;
