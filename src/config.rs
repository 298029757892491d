//! Configuration constants and settings for the quote calculator.

use serde::{Deserialize, Serialize};

/// Schema version written into saved quote documents.
pub const SCHEMA_VERSION: &str = "1.2.0";

/// Major schema version this build can read.
pub const SUPPORTED_SCHEMA_MAJOR: u32 = 1;

/// Tolerance for accumulated block heights while stacking a corner.
pub const STACK_EPS: f64 = 1e-6;

/// Extra length factor for a cornice ordered with a waste allowance.
pub const WASTE_FACTOR: f64 = 1.15;

/// Smallest block height/width accepted for a corner block.
pub const MIN_BLOCK_DIMENSION: f64 = 0.1;

/// Most pieces packed into one cutting plan. First-fit packing is quadratic
/// in the piece count, so larger groups are quoted without a plan.
pub const MAX_PLAN_CUTS: u64 = 10_000;

/// Conversion factor: cm to mm.
pub const CONV_CM_MM: f64 = 10.0;

/// Default window width (cm).
pub const DEFAULT_WIDTH: f64 = 120.0;

/// Default window height (cm).
pub const DEFAULT_HEIGHT: f64 = 140.0;

/// Default stock bar length for frame trim and cornices (cm).
pub const DEFAULT_BAR_LENGTH: f64 = 200.0;

/// Default keystone count when enabled.
pub const DEFAULT_KEYSTONE_QTY: f64 = 1.0;

/// Default bracket count (top or bottom) when enabled.
pub const DEFAULT_BRACKET_QTY: f64 = 2.0;

/// Default wall height for a corner (cm).
pub const DEFAULT_WALL_HEIGHT: f64 = 300.0;

/// Default block A height (cm).
pub const DEFAULT_BLOCK_HEIGHT: f64 = 25.0;

/// Default block A width (cm).
pub const DEFAULT_BLOCK_WIDTH: f64 = 30.0;

/// Default block B height (cm).
pub const DEFAULT_BLOCK_HEIGHT_B: f64 = 15.0;

/// Default block B width (cm).
pub const DEFAULT_BLOCK_WIDTH_B: f64 = 20.0;

/// Default price per block.
pub const DEFAULT_BLOCK_PRICE: f64 = 35.0;

/// Default top and bottom wall margin (cm).
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Default gap between stacked blocks (cm).
pub const DEFAULT_GAP: f64 = 5.0;

/// Display currency suffix.
pub const CURRENCY_SUFFIX: &str = "zł";

/// Unit used for user-entered kerf and overcut values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "mm")]
    Millimeters,
}

impl Unit {
    /// Parse unit from its short name.
    pub fn from_short_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Some(Unit::Centimeters),
            "mm" => Some(Unit::Millimeters),
            _ => None,
        }
    }

    /// Get the conversion factor to convert from this unit to millimeters.
    pub fn to_mm_factor(&self) -> f64 {
        match self {
            Unit::Centimeters => CONV_CM_MM,
            Unit::Millimeters => 1.0,
        }
    }

    /// Convert a value in this unit to millimeters.
    pub fn to_mm(&self, value: f64) -> f64 {
        value * self.to_mm_factor()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Centimeters => write!(f, "cm"),
            Unit::Millimeters => write!(f, "mm"),
        }
    }
}

/// Saw settings used when packing cuts into stock bars, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CutSettings {
    /// Blade width lost between two adjacent cuts.
    pub kerf_mm: f64,
    /// Safety margin added to every requested cut.
    pub overcut_mm: f64,
}

impl CutSettings {
    /// Create settings from values already in millimeters.
    pub fn new(kerf_mm: f64, overcut_mm: f64) -> Self {
        Self {
            kerf_mm: sanitize_allowance(kerf_mm),
            overcut_mm: sanitize_allowance(overcut_mm),
        }
    }

    /// Create settings from user-entered values in `unit`.
    pub fn from_unit(kerf: f64, overcut: f64, unit: Unit) -> Self {
        Self::new(unit.to_mm(kerf), unit.to_mm(overcut))
    }
}

/// Non-finite or negative allowances count as zero.
pub fn sanitize_allowance(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    /// Check if `a` exceeds `limit` by more than `eps`.
    #[inline]
    pub fn exceeds(a: f64, limit: f64, eps: f64) -> bool {
        a > limit + eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_short_str() {
        assert_eq!(Unit::from_short_str("cm"), Some(Unit::Centimeters));
        assert_eq!(Unit::from_short_str(" MM "), Some(Unit::Millimeters));
        assert_eq!(Unit::from_short_str("inch"), None);
    }

    #[test]
    fn test_unit_to_mm() {
        assert!((Unit::Centimeters.to_mm(0.3) - 3.0).abs() < 1e-9);
        assert_eq!(Unit::Millimeters.to_mm(3.0), 3.0);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Centimeters.to_string(), "cm");
        assert_eq!(Unit::Millimeters.to_string(), "mm");
    }

    #[test]
    fn test_cut_settings_sanitizes_allowances() {
        let settings = CutSettings::new(-2.0, f64::NAN);
        assert_eq!(settings.kerf_mm, 0.0);
        assert_eq!(settings.overcut_mm, 0.0);
    }

    #[test]
    fn test_cut_settings_from_centimeters() {
        let settings = CutSettings::from_unit(0.3, 1.0, Unit::Centimeters);
        assert!((settings.kerf_mm - 3.0).abs() < 1e-9);
        assert_eq!(settings.overcut_mm, 10.0);
    }

    #[test]
    fn test_exceeds_with_tolerance() {
        assert!(!float_cmp::exceeds(260.0000001, 260.0, 1e-6));
        assert!(float_cmp::exceeds(260.01, 260.0, 1e-6));
    }
}
