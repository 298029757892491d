//! Display formatting for money and lengths.

use crate::config::{Unit, CURRENCY_SUFFIX};

/// Format an amount in the display currency: `1 234,50 zł`.
///
/// Non-finite amounts are shown as zero.
pub fn format_money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{}{},{:02} {}", sign, grouped, cents % 100, CURRENCY_SUFFIX)
}

/// Format a length given in millimeters for display in `unit`.
pub fn format_length(mm: f64, unit: Unit) -> String {
    match unit {
        Unit::Millimeters => format!("{} mm", mm),
        Unit::Centimeters => {
            let cm = format!("{:.1}", mm / unit.to_mm_factor());
            let cm = cm.strip_suffix(".0").unwrap_or(&cm);
            format!("{} cm", cm)
        }
    }
}
