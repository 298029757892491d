//! Window trim quantity and cost calculation.

use crate::config::{
    DEFAULT_BAR_LENGTH, DEFAULT_BRACKET_QTY, DEFAULT_HEIGHT, DEFAULT_KEYSTONE_QTY, DEFAULT_WIDTH,
    WASTE_FACTOR,
};
use crate::model::{
    Accessory, AccessoryQuantity, AccessorySpec, BarStock, Cornice, CorniceSpec,
    MaterialQuantity, Window, WindowResult, WindowSpec,
};
use crate::parser::{parse_clamped_number, parse_count};

const MAX: f64 = f64::MAX;

/// Normalize a raw window: parse every field, fall back, clamp.
pub fn normalize_window(spec: &WindowSpec) -> Window {
    Window {
        name: spec.name.clone().unwrap_or_default(),
        width: parse_clamped_number(spec.w.as_ref(), DEFAULT_WIDTH, 1.0, MAX),
        height: parse_clamped_number(spec.h.as_ref(), DEFAULT_HEIGHT, 1.0, MAX),
        qty: parse_count(spec.qty.as_ref(), 1.0, 1),
        mode: spec.mode.unwrap_or_default(),
        discount: parse_clamped_number(spec.discount.as_ref(), 0.0, 0.0, 100.0),
        frame: BarStock {
            length: parse_clamped_number(spec.frame.len_bar.as_ref(), DEFAULT_BAR_LENGTH, 1.0, MAX),
            price: parse_clamped_number(spec.frame.price_bar.as_ref(), 0.0, 0.0, MAX),
        },
        lower_cornice: normalize_cornice(&spec.lower_cornice),
        upper_cornice: normalize_cornice(&spec.upper_cornice),
        keystone: normalize_accessory(&spec.keystone, DEFAULT_KEYSTONE_QTY),
        top_brackets: normalize_accessory(&spec.top_brackets, DEFAULT_BRACKET_QTY),
        bottom_brackets: normalize_accessory(&spec.bottom_brackets, DEFAULT_BRACKET_QTY),
        aggregate_as_one: spec.aggregate_as_one.unwrap_or(false),
    }
}

fn normalize_cornice(spec: &CorniceSpec) -> Cornice {
    Cornice {
        enabled: spec.enabled.unwrap_or(false),
        add_waste: spec.add_waste.unwrap_or(false),
        bar: BarStock {
            length: parse_clamped_number(spec.len_bar.as_ref(), DEFAULT_BAR_LENGTH, 1.0, MAX),
            price: parse_clamped_number(spec.price_bar.as_ref(), 0.0, 0.0, MAX),
        },
    }
}

fn normalize_accessory(spec: &AccessorySpec, default_qty: f64) -> Accessory {
    Accessory {
        enabled: spec.enabled.unwrap_or(false),
        qty: parse_count(spec.qty.as_ref(), default_qty, 1),
        price: parse_clamped_number(spec.price.as_ref(), 0.0, 0.0, MAX),
    }
}

/// Bars needed to cover `length` with bars of `bar_length`.
///
/// Always rounds up so material is never under-ordered.
pub fn bars_needed(length: f64, bar_length: f64) -> u64 {
    if length <= 0.0 {
        return 0;
    }
    (length / bar_length.max(1.0)).ceil() as u64
}

/// Cornice run length for one window.
pub fn cornice_length(width: f64, cornice: &Cornice) -> f64 {
    if !cornice.enabled {
        return 0.0;
    }
    if cornice.add_waste {
        width * WASTE_FACTOR
    } else {
        width
    }
}

fn material(length: f64, bar_length: f64, qty: u32) -> MaterialQuantity {
    let pieces = bars_needed(length, bar_length);
    MaterialQuantity {
        length,
        pieces,
        length_total: length * f64::from(qty),
        pieces_total: pieces.saturating_mul(u64::from(qty)),
    }
}

fn accessory(accessory: &Accessory, qty: u32) -> AccessoryQuantity {
    let pieces = accessory.pieces();
    AccessoryQuantity {
        pieces,
        pieces_total: u64::from(pieces) * u64::from(qty),
    }
}

/// Material cost (frame plus enabled cornices) for the given bar counts.
fn material_cost(window: &Window, frame: u64, lower: u64, upper: u64) -> f64 {
    let mut cost = frame as f64 * window.frame.price;
    if window.lower_cornice.enabled {
        cost += lower as f64 * window.lower_cornice.bar.price;
    }
    if window.upper_cornice.enabled {
        cost += upper as f64 * window.upper_cornice.bar.price;
    }
    cost
}

/// Compute quantities and costs for one window.
///
/// Never fails: invalid fields fall back to their defaults first.
pub fn calculate_window(spec: &WindowSpec) -> WindowResult {
    let window = normalize_window(spec);
    calculate_normalized(window)
}

/// Compute quantities and costs for an already normalized window.
pub fn calculate_normalized(window: Window) -> WindowResult {
    let qty = window.qty;

    let frame_len = window.mode.frame_length(window.width, window.height);
    let frame = material(frame_len, window.frame.length, qty);
    let lower_cornice = material(
        cornice_length(window.width, &window.lower_cornice),
        window.lower_cornice.bar.length,
        qty,
    );
    let upper_cornice = material(
        cornice_length(window.width, &window.upper_cornice),
        window.upper_cornice.bar.length,
        qty,
    );

    let accessory_cost = window.accessory_cost();
    let subtotal = material_cost(
        &window,
        frame.pieces,
        lower_cornice.pieces,
        upper_cornice.pieces,
    ) + accessory_cost;
    let unit_cost = subtotal * window.discount_factor();

    tracing::debug!(
        "Window '{}': frame {} cm / {} bar(s), unit cost {:.2}",
        window.name,
        frame_len,
        frame.pieces,
        unit_cost
    );

    WindowResult {
        keystone: accessory(&window.keystone, qty),
        top_brackets: accessory(&window.top_brackets, qty),
        bottom_brackets: accessory(&window.bottom_brackets, qty),
        frame,
        lower_cornice,
        upper_cornice,
        unit_cost,
        cost_total: unit_cost * f64::from(qty),
        accessory_cost_total: accessory_cost * f64::from(qty),
        aggregated: false,
        window,
    }
}

impl WindowResult {
    /// Re-derive piece totals as if all `qty` windows were one continuous run.
    ///
    /// Frame and enabled cornice totals become `ceil(length * qty / bar)`,
    /// and `cost_total` is recomputed from those totals. Per-unit figures are
    /// unchanged. With `qty == 1` the result is returned as is.
    pub fn aggregated(&self) -> WindowResult {
        let window = &self.window;
        if window.qty <= 1 {
            return self.clone();
        }

        let mut result = self.clone();
        result.frame.pieces_total = bars_needed(self.frame.length_total, window.frame.length);
        if window.lower_cornice.enabled {
            result.lower_cornice.pieces_total = bars_needed(
                self.lower_cornice.length_total,
                window.lower_cornice.bar.length,
            );
        }
        if window.upper_cornice.enabled {
            result.upper_cornice.pieces_total = bars_needed(
                self.upper_cornice.length_total,
                window.upper_cornice.bar.length,
            );
        }

        let subtotal = material_cost(
            window,
            result.frame.pieces_total,
            result.lower_cornice.pieces_total,
            result.upper_cornice.pieces_total,
        ) + window.accessory_cost() * f64::from(window.qty);
        result.cost_total = subtotal * window.discount_factor();
        result.aggregated = true;
        result
    }

    /// The figures to quote: aggregated when the window asks for it.
    pub fn effective(&self) -> WindowResult {
        if self.window.aggregate_as_one {
            self.aggregated()
        } else {
            self.clone()
        }
    }
}
