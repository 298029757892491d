//! Window trim item: raw input, normalized values and computed quantities.

use serde::{Deserialize, Serialize};

use super::raw_number::RawNumber;

/// Which edges of the window opening receive frame trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameMode {
    /// All four edges.
    #[default]
    #[serde(rename = "full")]
    Full,
    /// Top edge and both sides.
    #[serde(rename = "toplr")]
    TopAndSides,
    /// Both sides only.
    #[serde(rename = "sides")]
    SidesOnly,
}

impl FrameMode {
    /// Individual frame pieces for one window, in the unit of `width`/`height`.
    pub fn frame_pieces(&self, width: f64, height: f64) -> Vec<f64> {
        match self {
            FrameMode::Full => vec![width, width, height, height],
            FrameMode::TopAndSides => vec![width, height, height],
            FrameMode::SidesOnly => vec![height, height],
        }
    }

    /// Total frame length for one window.
    pub fn frame_length(&self, width: f64, height: f64) -> f64 {
        match self {
            FrameMode::Full => 2.0 * width + 2.0 * height,
            FrameMode::TopAndSides => width + 2.0 * height,
            FrameMode::SidesOnly => 2.0 * height,
        }
    }
}

impl std::fmt::Display for FrameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameMode::Full => write!(f, "full"),
            FrameMode::TopAndSides => write!(f, "toplr"),
            FrameMode::SidesOnly => write!(f, "sides"),
        }
    }
}

// ==================== Raw input ====================

/// Stock bar used for the frame trim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSpec {
    pub len_bar: Option<RawNumber>,
    pub price_bar: Option<RawNumber>,
}

/// A lower or upper cornice run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorniceSpec {
    pub enabled: Option<bool>,
    pub add_waste: Option<bool>,
    pub len_bar: Option<RawNumber>,
    pub price_bar: Option<RawNumber>,
}

/// An optional accessory line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorySpec {
    pub enabled: Option<bool>,
    pub qty: Option<RawNumber>,
    pub price: Option<RawNumber>,
}

/// Raw window input. Every field is optional; missing or unparseable values
/// fall back to defaults during normalization.
///
/// The same shape doubles as a preset: a partial record that is merged over
/// another with [`WindowSpec::merged_over`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSpec {
    pub name: Option<String>,
    pub w: Option<RawNumber>,
    pub h: Option<RawNumber>,
    pub qty: Option<RawNumber>,
    pub mode: Option<FrameMode>,
    pub discount: Option<RawNumber>,
    pub frame: BarSpec,
    pub lower_cornice: CorniceSpec,
    pub upper_cornice: CorniceSpec,
    pub keystone: AccessorySpec,
    pub top_brackets: AccessorySpec,
    pub bottom_brackets: AccessorySpec,
    pub aggregate_as_one: Option<bool>,
}

impl BarSpec {
    fn merged_over(&self, base: &BarSpec) -> BarSpec {
        BarSpec {
            len_bar: self.len_bar.clone().or_else(|| base.len_bar.clone()),
            price_bar: self.price_bar.clone().or_else(|| base.price_bar.clone()),
        }
    }
}

impl CorniceSpec {
    fn merged_over(&self, base: &CorniceSpec) -> CorniceSpec {
        CorniceSpec {
            enabled: self.enabled.or(base.enabled),
            add_waste: self.add_waste.or(base.add_waste),
            len_bar: self.len_bar.clone().or_else(|| base.len_bar.clone()),
            price_bar: self.price_bar.clone().or_else(|| base.price_bar.clone()),
        }
    }
}

impl AccessorySpec {
    fn merged_over(&self, base: &AccessorySpec) -> AccessorySpec {
        AccessorySpec {
            enabled: self.enabled.or(base.enabled),
            qty: self.qty.clone().or_else(|| base.qty.clone()),
            price: self.price.clone().or_else(|| base.price.clone()),
        }
    }
}

impl WindowSpec {
    /// Fill every field missing here from `base`.
    pub fn merged_over(&self, base: &WindowSpec) -> WindowSpec {
        WindowSpec {
            name: self.name.clone().or_else(|| base.name.clone()),
            w: self.w.clone().or_else(|| base.w.clone()),
            h: self.h.clone().or_else(|| base.h.clone()),
            qty: self.qty.clone().or_else(|| base.qty.clone()),
            mode: self.mode.or(base.mode),
            discount: self.discount.clone().or_else(|| base.discount.clone()),
            frame: self.frame.merged_over(&base.frame),
            lower_cornice: self.lower_cornice.merged_over(&base.lower_cornice),
            upper_cornice: self.upper_cornice.merged_over(&base.upper_cornice),
            keystone: self.keystone.merged_over(&base.keystone),
            top_brackets: self.top_brackets.merged_over(&base.top_brackets),
            bottom_brackets: self.bottom_brackets.merged_over(&base.bottom_brackets),
            aggregate_as_one: self.aggregate_as_one.or(base.aggregate_as_one),
        }
    }
}

// ==================== Normalized values ====================

/// A stock bar with its length (cm) and price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStock {
    pub length: f64,
    pub price: f64,
}

/// Normalized cornice settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cornice {
    pub enabled: bool,
    pub add_waste: bool,
    pub bar: BarStock,
}

/// Normalized accessory line item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    pub enabled: bool,
    pub qty: u32,
    pub price: f64,
}

impl Accessory {
    /// Pieces ordered for one window.
    pub fn pieces(&self) -> u32 {
        if self.enabled {
            self.qty
        } else {
            0
        }
    }
}

/// A fully normalized window: every number parsed and clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub name: String,
    /// Opening width (cm), at least 1.
    pub width: f64,
    /// Opening height (cm), at least 1.
    pub height: f64,
    /// Number of identical windows, at least 1.
    pub qty: u32,
    pub mode: FrameMode,
    /// Discount percentage in `[0, 100]`.
    pub discount: f64,
    pub frame: BarStock,
    pub lower_cornice: Cornice,
    pub upper_cornice: Cornice,
    pub keystone: Accessory,
    pub top_brackets: Accessory,
    pub bottom_brackets: Accessory,
    pub aggregate_as_one: bool,
}

impl Window {
    /// Multiplier applied to the pre-discount subtotal.
    pub fn discount_factor(&self) -> f64 {
        1.0 - self.discount / 100.0
    }

    /// Accessory cost for one window, before discount.
    pub fn accessory_cost(&self) -> f64 {
        [self.keystone, self.top_brackets, self.bottom_brackets]
            .iter()
            .map(|a| f64::from(a.pieces()) * a.price)
            .sum()
    }
}

impl From<&BarStock> for BarSpec {
    fn from(bar: &BarStock) -> Self {
        BarSpec {
            len_bar: Some(RawNumber::Number(bar.length)),
            price_bar: Some(RawNumber::Number(bar.price)),
        }
    }
}

impl From<&Cornice> for CorniceSpec {
    fn from(cornice: &Cornice) -> Self {
        CorniceSpec {
            enabled: Some(cornice.enabled),
            add_waste: Some(cornice.add_waste),
            len_bar: Some(RawNumber::Number(cornice.bar.length)),
            price_bar: Some(RawNumber::Number(cornice.bar.price)),
        }
    }
}

impl From<&Accessory> for AccessorySpec {
    fn from(accessory: &Accessory) -> Self {
        AccessorySpec {
            enabled: Some(accessory.enabled),
            qty: Some(RawNumber::from(accessory.qty)),
            price: Some(RawNumber::Number(accessory.price)),
        }
    }
}

impl From<&Window> for WindowSpec {
    fn from(window: &Window) -> Self {
        WindowSpec {
            name: Some(window.name.clone()),
            w: Some(RawNumber::Number(window.width)),
            h: Some(RawNumber::Number(window.height)),
            qty: Some(RawNumber::from(window.qty)),
            mode: Some(window.mode),
            discount: Some(RawNumber::Number(window.discount)),
            frame: BarSpec::from(&window.frame),
            lower_cornice: CorniceSpec::from(&window.lower_cornice),
            upper_cornice: CorniceSpec::from(&window.upper_cornice),
            keystone: AccessorySpec::from(&window.keystone),
            top_brackets: AccessorySpec::from(&window.top_brackets),
            bottom_brackets: AccessorySpec::from(&window.bottom_brackets),
            aggregate_as_one: Some(window.aggregate_as_one),
        }
    }
}

// ==================== Computed quantities ====================

/// Length and bar count for one material of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantity {
    /// Length needed for one window (cm).
    pub length: f64,
    /// Bars needed for one window.
    pub pieces: u64,
    /// Length needed for all `qty` windows (cm).
    pub length_total: f64,
    /// Bars ordered for all `qty` windows.
    pub pieces_total: u64,
}

/// Piece counts for one accessory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryQuantity {
    pub pieces: u32,
    pub pieces_total: u64,
}

/// Quantities and costs derived from one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResult {
    /// The normalized input.
    pub window: Window,
    pub frame: MaterialQuantity,
    pub lower_cornice: MaterialQuantity,
    pub upper_cornice: MaterialQuantity,
    pub keystone: AccessoryQuantity,
    pub top_brackets: AccessoryQuantity,
    pub bottom_brackets: AccessoryQuantity,
    /// Discounted cost of one window.
    pub unit_cost: f64,
    /// Discounted cost of all `qty` windows.
    pub cost_total: f64,
    /// Undiscounted accessory cost of all `qty` windows.
    pub accessory_cost_total: f64,
    /// Whether piece totals were re-derived as one continuous run.
    pub aggregated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw;

    #[test]
    fn test_frame_length_by_mode() {
        assert_eq!(FrameMode::Full.frame_length(150.0, 180.0), 660.0);
        assert_eq!(FrameMode::TopAndSides.frame_length(150.0, 180.0), 510.0);
        assert_eq!(FrameMode::SidesOnly.frame_length(150.0, 180.0), 360.0);
    }

    #[test]
    fn test_frame_pieces_sum_to_length() {
        for mode in [FrameMode::Full, FrameMode::TopAndSides, FrameMode::SidesOnly] {
            let sum: f64 = mode.frame_pieces(120.0, 150.0).iter().sum();
            assert_eq!(sum, mode.frame_length(120.0, 150.0));
        }
    }

    #[test]
    fn test_frame_mode_serde_names() {
        let mode: FrameMode = serde_json::from_str("\"toplr\"").unwrap();
        assert_eq!(mode, FrameMode::TopAndSides);
        assert_eq!(serde_json::to_string(&FrameMode::SidesOnly).unwrap(), "\"sides\"");
    }

    #[test]
    fn test_merged_over_prefers_own_fields() {
        let base = WindowSpec {
            name: Some("Salon".to_string()),
            w: raw(150.0),
            h: raw(180.0),
            lower_cornice: CorniceSpec {
                enabled: Some(true),
                len_bar: raw(200.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let overlay = WindowSpec {
            w: raw("90"),
            lower_cornice: CorniceSpec {
                enabled: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = overlay.merged_over(&base);
        assert_eq!(merged.name.as_deref(), Some("Salon"));
        assert_eq!(merged.w, raw("90"));
        assert_eq!(merged.h, raw(180.0));
        assert_eq!(merged.lower_cornice.enabled, Some(false));
        assert_eq!(merged.lower_cornice.len_bar, raw(200.0));
    }

    #[test]
    fn test_accessory_pieces_only_when_enabled() {
        let accessory = Accessory {
            enabled: false,
            qty: 4,
            price: 10.0,
        };
        assert_eq!(accessory.pieces(), 0);
        assert_eq!(
            Accessory {
                enabled: true,
                ..accessory
            }
            .pieces(),
            4
        );
    }
}
