//! Raw numeric field values as they arrive from forms or imported documents.

use serde::{Deserialize, Serialize};

/// A numeric field that may arrive either as a number or as user-typed text.
///
/// Text accepts `.` or `,` as the decimal separator. Interpretation happens in
/// [`crate::parser::parse_number`]; this type only carries the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<u32> for RawNumber {
    fn from(value: u32) -> Self {
        RawNumber::Number(f64::from(value))
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl std::fmt::Display for RawNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Shorthand for building an optional raw number from anything convertible.
pub fn raw(value: impl Into<RawNumber>) -> Option<RawNumber> {
    Some(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_and_text() {
        let n: RawNumber = serde_json::from_str("12.5").unwrap();
        assert_eq!(n, RawNumber::Number(12.5));

        let t: RawNumber = serde_json::from_str("\"12,5\"").unwrap();
        assert_eq!(t, RawNumber::Text("12,5".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(RawNumber::from(150.0).to_string(), "150");
        assert_eq!(RawNumber::from("abc").to_string(), "abc");
    }
}
