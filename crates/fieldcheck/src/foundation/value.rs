//! Dynamic field values
//!
//! Hosts hand the engine values of many Rust types. At the boundary every one
//! of them is converted into a [`Value`], a small closed tagged model that the
//! status resolver pattern-matches on. Each value belongs to exactly one
//! [`Category`], which decides which rules can evaluate it.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::foundation::{Category, Value};
//!
//! assert_eq!(Value::from(42).category(), Category::Numeric);
//! assert_eq!(Value::from("north").category(), Category::Text);
//! assert_eq!(Value::from(None::<i32>), Value::Null);
//! assert!(Value::from("   ").is_blank());
//! ```

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

// ============================================================================
// VALUE
// ============================================================================

/// A field value as seen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Absent value.
    Null,
    /// Free text.
    Text(String),
    /// Integral number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time without a time zone.
    DateTime(NaiveDateTime),
    /// Composite value with no ordering, e.g. a JSON object.
    Opaque(serde_json::Value),
}

/// Behavioural category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `Null`.
    Nullable,
    /// `Text`.
    Text,
    /// `Integer`.
    Numeric,
    /// `Boolean`.
    Boolean,
    /// `Float`, `Date` and `DateTime`.
    Orderable,
    /// `Opaque`.
    Opaque,
}

impl Category {
    /// Returns `true` if values of this category can be ordered.
    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Numeric | Self::Boolean | Self::Orderable
        )
    }
}

impl Value {
    /// Returns the behavioural category of this value.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Null => Category::Nullable,
            Self::Text(_) => Category::Text,
            Self::Integer(_) => Category::Numeric,
            Self::Boolean(_) => Category::Boolean,
            Self::Float(_) | Self::Date(_) | Self::DateTime(_) => Category::Orderable,
            Self::Opaque(_) => Category::Opaque,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for `Null` and for text that is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the text content if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Orders two values.
    ///
    /// Returns `None` when either side cannot be ordered or when the two
    /// kinds have no mutual ordering (text against a number, for instance).
    /// Integers and floats compare numerically; a date compares against a
    /// date-time as midnight of that day.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Float(b)) => compare_integer_float(*a, *b),
            (Self::Float(a), Self::Integer(b)) => {
                compare_integer_float(*b, *a).map(Ordering::reverse)
            }
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::DateTime(b)) => Some(a.and_time(NaiveTime::MIN).cmp(b)),
            (Self::DateTime(a), Self::Date(b)) => Some(a.cmp(&b.and_time(NaiveTime::MIN))),
            _ => None,
        }
    }
}

// 2^63, the first float above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float; `None` for NaN.
fn compare_integer_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    let floor = float.floor();
    // In [-2^63, 2^63) the floor is an exact i64.
    #[allow(clippy::cast_possible_truncation)]
    let whole = floor as i64;
    match int.cmp(&whole) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        order => Some(order),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Opaque(json) => write!(f, "{json}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! integer_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )+
    };
}

integer_from!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! saturating_integer_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            /// Saturates at `i64::MAX`.
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
                }
            }
        )+
    };
}

saturating_integer_from!(u64, usize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// JSON scalars map onto their natural variants; arrays and objects become
/// [`Value::Opaque`].
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(b),
            Json::String(text) => Self::Text(text),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            composite @ (Json::Array(_) | Json::Object(_)) => Self::Opaque(composite),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_categories() {
        assert_eq!(Value::Null.category(), Category::Nullable);
        assert_eq!(Value::from("a").category(), Category::Text);
        assert_eq!(Value::from(1_i64).category(), Category::Numeric);
        assert_eq!(Value::from(true).category(), Category::Boolean);
        assert_eq!(Value::from(1.5).category(), Category::Orderable);
        assert_eq!(Value::from(json!({"a": 1})).category(), Category::Opaque);
    }

    #[test]
    fn test_ordering_support() {
        assert!(Category::Text.supports_ordering());
        assert!(Category::Orderable.supports_ordering());
        assert!(!Category::Nullable.supports_ordering());
        assert!(!Category::Opaque.supports_ordering());
    }

    #[test]
    fn test_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("").is_blank());
        assert!(Value::from(" \t").is_blank());
        assert!(!Value::from(" x ").is_blank());
        assert!(!Value::from(0).is_blank());
    }

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(Value::from(1).compare(&Value::from(2)), Some(Ordering::Less));
        assert_eq!(
            Value::from("b").compare(&Value::from("a")),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::from(false).compare(&Value::from(true)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(Value::from(2).compare(&Value::from(1.5)), Some(Ordering::Greater));
        assert_eq!(Value::from(1.0).compare(&Value::from(1)), Some(Ordering::Equal));
        assert_eq!(Value::from(f64::NAN).compare(&Value::from(1)), None);
    }

    #[test]
    fn test_compare_mixed_numbers_is_exact() {
        let two_53 = 9_007_199_254_740_992_i64;
        let two_53_f = 9_007_199_254_740_992.0;

        assert_eq!(
            Value::from(two_53 + 1).compare(&Value::from(two_53_f)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::from(two_53_f).compare(&Value::from(two_53 + 1)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from(two_53).compare(&Value::from(two_53_f)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::from(i64::MAX).compare(&Value::from(9_223_372_036_854_775_808.0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from(i64::MIN).compare(&Value::from(-9_223_372_036_854_775_808.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::from(-3).compare(&Value::from(-2.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from(-2).compare(&Value::from(-2.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::from(0).compare(&Value::from(f64::NEG_INFINITY)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::from(i64::MAX).compare(&Value::from(f64::INFINITY)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_from_wide_unsigned_saturates() {
        assert_eq!(Value::from(42_usize), Value::Integer(42));
        assert_eq!(Value::from(7_u64), Value::Integer(7));
        assert_eq!(Value::from(u64::MAX), Value::Integer(i64::MAX));
    }

    #[test]
    fn test_compare_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let noon = day.and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(Value::from(day).compare(&Value::from(noon)), Some(Ordering::Less));
        assert_eq!(
            Value::from(day).compare(&Value::from(day.and_time(NaiveTime::MIN))),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_compare_incompatible() {
        assert_eq!(Value::from("1").compare(&Value::from(1)), None);
        assert_eq!(Value::Null.compare(&Value::Null), None);
        assert_eq!(Value::from(json!([1])).compare(&Value::from(json!([1]))), None);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(7)), Value::Integer(7));
        assert_eq!(Value::from(json!(7.5)), Value::Float(7.5));
        assert_eq!(Value::from(json!("x")), Value::from("x"));
        assert!(matches!(Value::from(json!({"k": "v"})), Value::Opaque(_)));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(Some(3_u8)), Value::Integer(3));
        assert_eq!(Value::from(None::<String>), Value::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("A20").to_string(), "A20");
        assert_eq!(Value::from(25).to_string(), "25");
        assert_eq!(Value::from(json!({"a": 1})).to_string(), r#"{"a":1}"#);
    }
}
