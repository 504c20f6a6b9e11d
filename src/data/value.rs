//! Scalar cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field value of a row.
///
/// Mirrors the JSON scalars accepted in row files: strings, numbers and
/// booleans. Numbers are stored as `f64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// Free-form text.
    Text(String),
}

impl Value {
    /// Whether this value is a number.
    ///
    /// Numeric values get a numeric editor and their edits are coerced back
    /// to numbers.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Truthiness of the value.
    ///
    /// Empty text, zero, NaN and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Integral numbers print without a fractional part.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integral_number() {
        assert_eq!(Value::Number(28.0).to_string(), "28");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_display_fractional_number() {
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_display_text_and_bool() {
        assert_eq!(Value::from("John").to_string(), "John");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::from("x").is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(Value::Number(2.0).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
    }

    #[test]
    fn test_deserialize_json_scalars() {
        let values: Vec<Value> = serde_json::from_str(r#"["a", 28, 1.5, true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::from("a"),
                Value::Number(28.0),
                Value::Number(1.5),
                Value::Bool(true),
            ]
        );
    }

    #[test]
    fn test_is_number() {
        assert!(Value::from(30).is_number());
        assert!(!Value::from("30").is_number());
        assert!(!Value::from(true).is_number());
    }
}
