//! Raw producer values.
//!
//! Route feeds populate fields with whatever they have on hand: a number,
//! a numeric string, free text, or nothing at all. `RawValue` is the single
//! coercion boundary for those values. Everything downstream of this type
//! works with plain strings and `Option<f64>`, never with untyped input.

use serde::{Deserialize, Serialize};

/// A field value as received from a route producer.
///
/// Deserializes untagged: JSON numbers become `Number`, strings become
/// `Text`, and `null` or a missing field becomes `Absent`.
///
/// # Examples
///
/// ```
/// use route_server::domain::RawValue;
///
/// assert_eq!(RawValue::Number(7.0).display_text(), "7");
/// assert_eq!(RawValue::Text("7".into()).numeric(), Some(7.0));
/// assert_eq!(RawValue::Absent.display_text(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// The producer did not supply the field (or supplied `null`).
    #[default]
    Absent,
    /// A native numeric value.
    Number(f64),
    /// A string value; may or may not be numeric text.
    Text(String),
}

impl RawValue {
    /// Returns true unless the value is `Absent`.
    ///
    /// An explicitly empty string is present; callers that care about
    /// blankness must check the coerced text themselves.
    pub fn is_present(&self) -> bool {
        !matches!(self, RawValue::Absent)
    }

    /// Coerce to display text: `""` for absent values, decimal form for
    /// numbers, strings unchanged.
    pub fn display_text(&self) -> String {
        match self {
            RawValue::Absent => String::new(),
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }

    /// Numeric interpretation: native numbers as-is, numeric strings
    /// parsed after trimming. `None` for absent or non-numeric values.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            RawValue::Absent => None,
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}
