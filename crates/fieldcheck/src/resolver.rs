//! Status resolution
//!
//! Every rule and guard goes through [`resolve`], which applies the same
//! steps in a fixed order:
//!
//! 1. **Precondition short-circuit**: a preceding guard whose status blocks
//!    dependents yields [`Status::PreConditionNotMet`].
//! 2. **Null/blank substitution**: a null value or whitespace-only text yields
//!    [`Status::NullValueOperation`].
//! 3. **Capability check**: a value whose category lacks what the predicate
//!    needs yields [`Status::IncompatibleType`].
//! 4. **Predicate**: `Passed` / `Failed` (or `IncompatibleType` when two
//!    values turn out to have no mutual ordering).
//!
//! Which of steps 1 and 2 apply is decided per rule by its [`Gate`].

use std::cmp::Ordering;
use std::path::Path;

use crate::foundation::{Status, Value};
use crate::probe::FileProbe;
use crate::rules::Domain;

// ============================================================================
// RESOLUTION
// ============================================================================

/// Which resolution steps a rule passes through before its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    /// Short-circuit and null/blank substitution.
    Full,
    /// Short-circuit only; null and blank values reach the predicate.
    PreResultOnly,
    /// Neither; the predicate always runs.
    Open,
}

/// What the predicate needs from the value's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Capability {
    Any,
    Ordering,
    Text,
}

impl Capability {
    fn supported_by(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Ordering => value.category().supports_ordering(),
            Self::Text => value.as_text().is_some(),
        }
    }
}

/// Resolves the status of one evaluation.
///
/// `pre_status` is the status of the guard preceding the rule, if any.
pub(crate) fn resolve<F>(
    pre_status: Option<Status>,
    value: &Value,
    gate: Gate,
    capability: Capability,
    predicate: F,
) -> Status
where
    F: FnOnce(&Value) -> Status,
{
    if gate != Gate::Open && pre_status.is_some_and(Status::blocks_dependents) {
        return Status::PreConditionNotMet;
    }
    if gate == Gate::Full && value.is_blank() {
        return Status::NullValueOperation;
    }
    if !capability.supported_by(value) {
        return Status::IncompatibleType;
    }
    predicate(value)
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Integers, or text made of an optional sign followed by ASCII digits.
pub(crate) fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Text(text) => {
            let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

/// Booleans, or the text `true` / `false` in any case.
pub(crate) fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Boolean(_) => true,
        Value::Text(text) => {
            text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
        }
        _ => false,
    }
}

/// Compares `value` against `bound` and passes when `accept` holds for the
/// ordering.
pub(crate) fn ordering(value: &Value, bound: &Value, accept: fn(Ordering) -> bool) -> Status {
    match value.compare(bound) {
        Some(order) => Status::from_bool(accept(order)),
        None => Status::IncompatibleType,
    }
}

/// Range membership, inclusive or exclusive at both ends.
pub(crate) fn within(value: &Value, from: &Value, to: &Value, inclusive: bool) -> Status {
    let (Some(low), Some(high)) = (value.compare(from), value.compare(to)) else {
        return Status::IncompatibleType;
    };
    let holds = if inclusive {
        low != Ordering::Less && high != Ordering::Greater
    } else {
        low == Ordering::Greater && high == Ordering::Less
    };
    Status::from_bool(holds)
}

/// Case-insensitive text equality. Callers gate on [`Capability::Text`].
pub(crate) fn text_eq_ignore_case(value: &Value, expected: &str) -> Status {
    let text = value.as_text().unwrap_or_default();
    Status::from_bool(text.to_lowercase() == expected.to_lowercase())
}

pub(crate) fn one_of(value: &Value, domain: &Domain, ignore_case: bool) -> Status {
    if ignore_case {
        Status::from_bool(domain.contains_ignore_case(value))
    } else {
        Status::from_bool(domain.contains(value))
    }
}

/// Asks the probe whether the text value names an existing file. Probe
/// errors count as a missing file.
pub(crate) fn existing_file(value: &Value, probe: &dyn FileProbe) -> Status {
    let path = value.as_text().unwrap_or_default();
    match probe.exists(Path::new(path)) {
        Ok(found) => Status::from_bool(found),
        Err(error) => {
            tracing::debug!(path, %error, "file probe failed");
            Status::Failed
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn passes(_: &Value) -> Status {
        Status::Passed
    }

    #[test]
    fn test_short_circuit_wins_over_null() {
        let status = resolve(
            Some(Status::Failed),
            &Value::Null,
            Gate::Full,
            Capability::Any,
            passes,
        );
        assert_eq!(status, Status::PreConditionNotMet);
    }

    #[test]
    fn test_null_substitution_before_capability() {
        let status = resolve(None, &Value::Null, Gate::Full, Capability::Ordering, passes);
        assert_eq!(status, Status::NullValueOperation);
    }

    #[test]
    fn test_blank_text_is_null_equivalent() {
        let status = resolve(None, &Value::from("  "), Gate::Full, Capability::Any, passes);
        assert_eq!(status, Status::NullValueOperation);
    }

    #[test]
    fn test_pre_result_only_lets_null_through() {
        let status = resolve(None, &Value::Null, Gate::PreResultOnly, Capability::Any, passes);
        assert_eq!(status, Status::Passed);

        let status = resolve(
            Some(Status::NullValueOperation),
            &Value::Null,
            Gate::PreResultOnly,
            Capability::Any,
            passes,
        );
        assert_eq!(status, Status::PreConditionNotMet);
    }

    #[test]
    fn test_open_gate_ignores_pre_result() {
        let status = resolve(
            Some(Status::Failed),
            &Value::Null,
            Gate::Open,
            Capability::Any,
            passes,
        );
        assert_eq!(status, Status::Passed);
    }

    #[test]
    fn test_passed_or_incompatible_guard_does_not_block() {
        for pre in [Status::Passed, Status::IncompatibleType, Status::PreConditionNotMet] {
            let status = resolve(Some(pre), &Value::from(1), Gate::Full, Capability::Any, passes);
            assert_eq!(status, Status::Passed);
        }
    }

    #[test]
    fn test_capability_check() {
        let opaque = Value::from(serde_json::json!({"a": 1}));
        let status = resolve(None, &opaque, Gate::Full, Capability::Ordering, passes);
        assert_eq!(status, Status::IncompatibleType);

        let status = resolve(None, &Value::from(3), Gate::Full, Capability::Text, passes);
        assert_eq!(status, Status::IncompatibleType);
    }

    #[rstest]
    #[case(Value::from("45"), true)]
    #[case(Value::from("+45"), true)]
    #[case(Value::from("-0"), true)]
    #[case(Value::from("4s5"), false)]
    #[case(Value::from("+"), false)]
    #[case(Value::from("4.5"), false)]
    #[case(Value::from(12), true)]
    #[case(Value::from(1.5), false)]
    #[case(Value::Null, false)]
    fn test_is_numeric(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_numeric(&value), expected);
    }

    #[rstest]
    #[case(Value::from("true"), true)]
    #[case(Value::from("FALSE"), true)]
    #[case(Value::from("TrUe"), true)]
    #[case(Value::from("yes"), false)]
    #[case(Value::from(false), true)]
    #[case(Value::from(1), false)]
    fn test_is_boolean(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_boolean(&value), expected);
    }

    #[test]
    fn test_ordering_mismatch_is_incompatible() {
        let status = ordering(&Value::from("a"), &Value::from(1), Ordering::is_gt);
        assert_eq!(status, Status::IncompatibleType);
    }

    #[rstest]
    #[case(10, true, Status::Passed)]
    #[case(20, true, Status::Passed)]
    #[case(9, true, Status::Failed)]
    #[case(10, false, Status::Failed)]
    #[case(20, false, Status::Failed)]
    #[case(15, false, Status::Passed)]
    fn test_within(#[case] n: i32, #[case] inclusive: bool, #[case] expected: Status) {
        let status = within(&Value::from(n), &Value::from(10), &Value::from(20), inclusive);
        assert_eq!(status, expected);
    }

    #[test]
    fn test_existing_file_maps_errors_to_failed() {
        let probe = |_: &Path| -> std::io::Result<bool> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied))
        };
        assert_eq!(existing_file(&Value::from("/etc"), &probe), Status::Failed);
    }
}
