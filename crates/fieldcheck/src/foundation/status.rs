//! Evaluation outcome taxonomy

use std::fmt;

use serde::Serialize;

/// Outcome of evaluating one rule or guard.
///
/// A status is computed once and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// The predicate did not hold.
    Failed,
    /// The predicate held.
    Passed,
    /// The value was null (or blank text) and the rule needs a value.
    NullValueOperation,
    /// The value's category does not support what the rule needs.
    IncompatibleType,
    /// A preceding guard did not hold, so the rule was not evaluated.
    PreConditionNotMet,
}

impl Status {
    /// Maps a predicate outcome onto `Passed` / `Failed`.
    #[must_use]
    pub const fn from_bool(holds: bool) -> Self {
        if holds { Self::Passed } else { Self::Failed }
    }

    /// Returns `true` for [`Status::Passed`].
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns `true` if a guard with this status prevents dependent rules
    /// from being evaluated.
    #[must_use]
    pub const fn blocks_dependents(self) -> bool {
        matches!(self, Self::Failed | Self::NullValueOperation)
    }

    /// Stable name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Failed => "Failed",
            Self::Passed => "Passed",
            Self::NullValueOperation => "NullValueOperation",
            Self::IncompatibleType => "IncompatibleType",
            Self::PreConditionNotMet => "PreConditionNotMet",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(Status::from_bool(true), Status::Passed);
        assert_eq!(Status::from_bool(false), Status::Failed);
    }

    #[test]
    fn test_blocks_dependents() {
        assert!(Status::Failed.blocks_dependents());
        assert!(Status::NullValueOperation.blocks_dependents());
        assert!(!Status::Passed.blocks_dependents());
        assert!(!Status::IncompatibleType.blocks_dependents());
        assert!(!Status::PreConditionNotMet.blocks_dependents());
    }

    #[test]
    fn test_serialized_name_matches_display() {
        let json = serde_json::to_string(&Status::NullValueOperation).unwrap();
        assert_eq!(json, "\"NullValueOperation\"");
        assert_eq!(Status::NullValueOperation.to_string(), "NullValueOperation");
    }
}
