//! Lenient numeric parsing shared by both calculators.
//!
//! Every numeric form field goes through [`parse_clamped_number`]: parse the
//! raw value, fall back on failure, then clamp into the valid domain.

use crate::model::RawNumber;

/// Parse a raw field value into a finite number.
///
/// Text is read like a form field: surrounding whitespace is ignored, the
/// first `,` is treated as a decimal point and the longest numeric prefix is
/// used (`"12,5 cm"` reads as `12.5`). Returns `None` when no finite number
/// can be read.
pub fn parse_number(raw: &RawNumber) -> Option<f64> {
    match raw {
        RawNumber::Number(n) => n.is_finite().then_some(*n),
        RawNumber::Text(s) => parse_decimal(s),
    }
}

/// Parse decimal text accepting either `.` or `,` as the separator.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    let prefix = numeric_prefix(&normalized);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Longest prefix of `s` that forms a decimal number with optional exponent.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if digits > 0 {
        end = i;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
        if digits > 0 {
            end = i;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when followed by at least one digit.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    &s[..end]
}

/// Parse an optional raw value, falling back and clamping into `[min, max]`.
pub fn parse_clamped_number(raw: Option<&RawNumber>, fallback: f64, min: f64, max: f64) -> f64 {
    let value = raw.and_then(parse_number).unwrap_or(fallback);
    value.max(min).min(max)
}

/// Parse a count: fallback on failure, round to the nearest integer, then
/// clamp to at least `min`.
pub fn parse_count(raw: Option<&RawNumber>, fallback: f64, min: u32) -> u32 {
    let value = raw.and_then(parse_number).unwrap_or(fallback).round();
    // `as` saturates, so out-of-range values land on u32::MAX
    (value.max(f64::from(min))) as u32
}

/// Whether a present raw value would be replaced by its fallback.
pub fn is_unparseable(raw: Option<&RawNumber>) -> bool {
    raw.is_some_and(|r| parse_number(r).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawNumber {
        RawNumber::Text(s.to_string())
    }

    // ==================== parse_number tests ====================

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number(&RawNumber::Number(150.0)), Some(150.0));
        assert_eq!(parse_number(&text("150")), Some(150.0));
    }

    #[test]
    fn test_parse_number_comma_separator() {
        assert_eq!(parse_number(&text("12,5")), Some(12.5));
        assert_eq!(parse_number(&text(" 0,3 ")), Some(0.3));
    }

    #[test]
    fn test_parse_number_numeric_prefix() {
        assert_eq!(parse_number(&text("180cm")), Some(180.0));
        assert_eq!(parse_number(&text("-4.5x")), Some(-4.5));
        assert_eq!(parse_number(&text(".5")), Some(0.5));
        assert_eq!(parse_number(&text("1e3")), Some(1000.0));
        assert_eq!(parse_number(&text("2e")), Some(2.0));
    }

    #[test]
    fn test_parse_number_invalid() {
        assert_eq!(parse_number(&text("")), None);
        assert_eq!(parse_number(&text("abc")), None);
        assert_eq!(parse_number(&text("-")), None);
        assert_eq!(parse_number(&text(".")), None);
        assert_eq!(parse_number(&RawNumber::Number(f64::NAN)), None);
        assert_eq!(parse_number(&RawNumber::Number(f64::INFINITY)), None);
    }

    // ==================== parse_clamped_number tests ====================

    #[test]
    fn test_parse_clamped_number_fallback() {
        assert_eq!(parse_clamped_number(None, 120.0, 1.0, f64::MAX), 120.0);
        assert_eq!(
            parse_clamped_number(Some(&text("wide")), 120.0, 1.0, f64::MAX),
            120.0
        );
    }

    #[test]
    fn test_parse_clamped_number_clamps() {
        assert_eq!(
            parse_clamped_number(Some(&RawNumber::Number(-5.0)), 120.0, 1.0, f64::MAX),
            1.0
        );
        assert_eq!(
            parse_clamped_number(Some(&text("150")), 0.0, 0.0, 100.0),
            100.0
        );
    }

    // ==================== parse_count tests ====================

    #[test]
    fn test_parse_count_rounds() {
        assert_eq!(parse_count(Some(&text("2,6")), 1.0, 1), 3);
        assert_eq!(parse_count(Some(&RawNumber::Number(2.4)), 1.0, 1), 2);
    }

    #[test]
    fn test_parse_count_minimum() {
        assert_eq!(parse_count(Some(&RawNumber::Number(0.0)), 1.0, 1), 1);
        assert_eq!(parse_count(Some(&RawNumber::Number(-3.0)), 1.0, 1), 1);
        assert_eq!(parse_count(None, 2.0, 1), 2);
    }

    #[test]
    fn test_is_unparseable() {
        assert!(!is_unparseable(None));
        assert!(!is_unparseable(Some(&text("3"))));
        assert!(is_unparseable(Some(&text("three"))));
    }
}
