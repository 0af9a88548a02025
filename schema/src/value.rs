//! Scalar values and their kinds.

use std::fmt;

use crate::number::{format_number, parse_number};

/// A single scalar stored under a query key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Boolean flag, rendered as `true`/`false`.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Arbitrary text.
    String(String),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text if this is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Loose (coercing) equality between two scalars.
    ///
    /// Values of the same kind compare strictly, so NaN never equals
    /// anything. A string compared with a number is converted with
    /// [`parse_number`]; a boolean is converted to `1`/`0` before comparing
    /// again.
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(n), Self::String(s)) | (Self::String(s), Self::Number(n)) => {
                *n == parse_number(s)
            }
            (Self::Bool(b), other) | (other, Self::Bool(b)) => {
                Self::Number(f64::from(u8::from(*b))).loose_eq(other)
            }
        }
    }

    /// Strict equality under which NaN equals NaN.
    ///
    /// Use this to tell whether a value changed at all, as opposed to
    /// [`loose_eq`](Self::loose_eq) which decides what is worth writing.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }
}

/// Renders the value as it appears in a query string, before percent-encoding.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// How a raw query string value is interpreted for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// `true` only for the literal text `"true"`.
    Bool,
    /// Parsed with [`parse_number`]; unparsable text becomes NaN.
    Number,
    /// Passed through unchanged.
    String,
    /// No coercion; the decoded text is kept as a string.
    Raw,
}

impl ValueKind {
    /// Converts decoded query text into a value of this kind.
    #[must_use]
    pub fn coerce(self, raw: &str) -> Value {
        match self {
            Self::Bool => Value::Bool(raw == "true"),
            Self::Number => Value::Number(parse_number(raw)),
            Self::String | Self::Raw => Value::String(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_value_is_strict_but_matches_nan() {
        assert!(Value::Number(f64::NAN).same_value(&Value::Number(f64::NAN)));
        assert!(Value::Number(2.0).same_value(&Value::Number(2.0)));
        assert!(!Value::Number(1.0).same_value(&Value::from("1")));
        assert!(!Value::Bool(false).same_value(&Value::Number(0.0)));
        assert!(Value::from("x").same_value(&Value::from("x")));
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::from("a").as_number(), None);
    }

    #[test]
    fn display_uses_query_form() {
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(0.25).to_string(), "0.25");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }

    #[test]
    fn loose_eq_same_kind_is_strict() {
        assert!(Value::Number(1.0).loose_eq(&Value::Number(1.0)));
        assert!(!Value::Number(f64::NAN).loose_eq(&Value::Number(f64::NAN)));
        assert!(!Value::from("a").loose_eq(&Value::from("A")));
    }

    #[test]
    fn loose_eq_number_and_string() {
        assert!(Value::Number(0.0).loose_eq(&Value::from("0")));
        assert!(Value::from("0").loose_eq(&Value::Number(0.0)));
        assert!(Value::Number(0.0).loose_eq(&Value::from("")));
        assert!(Value::Number(16.0).loose_eq(&Value::from("0x10")));
        assert!(!Value::Number(1.0).loose_eq(&Value::from("one")));
    }

    #[test]
    fn loose_eq_bool_converts_to_number() {
        assert!(Value::Bool(true).loose_eq(&Value::Number(1.0)));
        assert!(Value::Bool(false).loose_eq(&Value::from("0")));
        assert!(Value::from("1").loose_eq(&Value::Bool(true)));
        assert!(!Value::Bool(true).loose_eq(&Value::from("true")));
        assert!(!Value::Bool(false).loose_eq(&Value::Number(2.0)));
    }

    #[test]
    fn coerce_by_kind() {
        assert_eq!(ValueKind::Bool.coerce("true"), Value::Bool(true));
        assert_eq!(ValueKind::Bool.coerce("TRUE"), Value::Bool(false));
        assert_eq!(ValueKind::Bool.coerce("1"), Value::Bool(false));
        assert_eq!(ValueKind::Number.coerce("2"), Value::Number(2.0));
        assert!(ValueKind::Number
            .coerce("two")
            .as_number()
            .is_some_and(f64::is_nan));
        assert_eq!(ValueKind::String.coerce("2"), Value::from("2"));
        assert_eq!(ValueKind::Raw.coerce("true"), Value::from("true"));
    }
}
