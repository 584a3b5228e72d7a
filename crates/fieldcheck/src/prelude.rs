//! Prelude module for convenient imports.
//!
//! `use fieldcheck::prelude::*;` brings in the validator, the listener
//! traits, and the types results are inspected with.

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::{Condition, PreCondition, Validator};

// ============================================================================
// LISTENERS AND PROBES
// ============================================================================

pub use crate::{FileProbe, KnownPaths, NoopListener, TracingListener, ValidationListener};

#[cfg(feature = "fs")]
pub use crate::FsProbe;

// ============================================================================
// REPORTS
// ============================================================================

pub use crate::{Payload, PreResult, Status, ValidationResult};

// ============================================================================
// OPERANDS
// ============================================================================

pub use crate::{Domain, FieldValue, Guard, NamedDomain, Pattern, Rule, Value};
