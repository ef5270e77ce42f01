//! Loosely typed field values
//!
//! Form fields hand rules whatever the user typed or picked. [`Value`] keeps
//! that loose shape (text, number, boolean, nothing) and provides the two
//! views rules need: a text view for length and format checks and a numeric
//! coercion for range checks.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A field value.
///
/// Serializes untagged, so `null`, `"text"`, `42` and `true` map directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value at all.
    #[default]
    Null,
    /// Boolean value (checkboxes, toggles).
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value (inputs, textareas, selects).
    Text(String),
}

impl Value {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns `true` for `Null` and the empty string.
    ///
    /// This is the emptiness every rule except `required` skips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// Returns the text form of the value.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Number(n) => Cow::Owned(format_number(*n)),
        }
    }

    /// Length of the text form in Unicode scalar values.
    #[must_use]
    pub fn char_len(&self) -> usize {
        match self {
            Self::Text(s) => s.chars().count(),
            other => other.as_text().chars().count(),
        }
    }

    /// Coerces the value to a number.
    ///
    /// Returns `None` when the value has no numeric reading (NaN).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formkit_validator::foundation::Value;
    ///
    /// assert_eq!(Value::text(" 42 ").to_number(), Some(42.0));
    /// assert_eq!(Value::text("0x10").to_number(), Some(16.0));
    /// assert_eq!(Value::text("1e3").to_number(), Some(1000.0));
    /// assert_eq!(Value::text("abc").to_number(), None);
    /// assert_eq!(Value::Bool(true).to_number(), Some(1.0));
    /// ```
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Null => Some(0.0),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Number(n) => (!n.is_nan()).then_some(*n),
            Self::Text(s) => parse_number(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_owned();
    }
    n.to_string()
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .ok()
            .map(|n| n as f64);
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, true)]
    #[case(Value::text(""), true)]
    #[case(Value::text(" "), false)]
    #[case(Value::Number(0.0), false)]
    #[case(Value::Bool(false), false)]
    fn test_is_empty(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_empty(), expected);
    }

    #[rstest]
    #[case("12", Some(12.0))]
    #[case("  -3.5 ", Some(-3.5))]
    #[case(".5", Some(0.5))]
    #[case("   ", Some(0.0))]
    #[case("0b101", Some(5.0))]
    #[case("0o17", Some(15.0))]
    #[case("-Infinity", Some(f64::NEG_INFINITY))]
    #[case("inf", None)]
    #[case("NaN", None)]
    #[case("12abc", None)]
    #[case("0xZZ", None)]
    fn test_parse_number(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(Value::text(raw).to_number(), expected);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Value::Number(5.0).as_text(), "5");
        assert_eq!(Value::Number(2.5).as_text(), "2.5");
        assert_eq!(Value::Bool(true).as_text(), "true");
        assert_eq!(Value::Null.as_text(), "");
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(Value::text("h\u{e9}llo").char_len(), 5);
        assert_eq!(Value::Number(123.0).char_len(), 3);
    }

    #[test]
    fn test_nan_number_has_no_numeric_reading() {
        assert_eq!(Value::Number(f64::NAN).to_number(), None);
    }

    #[test]
    fn test_serde_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, "a", 1.5, true]"#).unwrap();
        assert_eq!(
            values,
            vec![Value::Null, Value::text("a"), Value::Number(1.5), Value::Bool(true)]
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::text("x"));
    }
}
