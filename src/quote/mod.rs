//! Full quote pipeline: calculate every item, group cuts, pack bars.

mod groups;

pub use groups::build_cut_groups;

use serde::{Deserialize, Serialize};

use crate::calculator::{calculate_corner, calculate_window};
use crate::config::{CutSettings, Unit};
use crate::model::{CornerResult, GroupPlan, QuoteDocument, WindowResult};
use crate::optimizer::optimize;
use crate::parser::parse_clamped_number;
use crate::validation::{
    validate_corner_layouts, validate_document, validate_groups, validate_plans, ValidationResult,
};

/// Grand totals across all items of a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    /// Sum of window quantities.
    pub windows: u64,
    pub windows_cost: f64,
    /// Frame length for all windows (cm).
    pub frame_length: f64,
    pub frame_bars: u64,
    pub lower_cornice_bars: u64,
    pub upper_cornice_bars: u64,
    pub corner_blocks: u64,
    pub corners_cost: f64,
    pub total_cost: f64,
    /// Waste across all cutting plans (mm).
    pub cutting_waste_mm: f64,
}

/// Everything computed for one quote document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub units: Unit,
    pub settings: CutSettings,
    pub windows: Vec<WindowResult>,
    pub corners: Vec<CornerResult>,
    pub plans: Vec<GroupPlan>,
    pub totals: QuoteTotals,
    pub validation: ValidationResult,
}

/// Kerf and overcut of a document, converted to millimeters.
pub fn cut_settings(doc: &QuoteDocument) -> CutSettings {
    let kerf = parse_clamped_number(doc.kerf.as_ref(), 0.0, 0.0, f64::MAX);
    let overcut = parse_clamped_number(doc.overcut.as_ref(), 0.0, 0.0, f64::MAX);
    CutSettings::from_unit(kerf, overcut, doc.units)
}

/// Compute a complete quote.
///
/// Never fails: every item is normalized, and data problems such as cuts
/// longer than their stock bar are reported in `validation`. Cut groups
/// above [`MAX_PLAN_CUTS`](crate::config::MAX_PLAN_CUTS) pieces are quoted
/// without a cutting plan and reported as warnings.
pub fn quote_document(doc: &QuoteDocument) -> QuoteSummary {
    let settings = cut_settings(doc);

    let windows: Vec<WindowResult> = doc
        .resolved_windows()
        .iter()
        .map(|spec| calculate_window(spec).effective())
        .collect();
    let corners: Vec<CornerResult> = doc.corners.iter().map(calculate_corner).collect();

    let groups = build_cut_groups(&windows);
    let plans: Vec<GroupPlan> = groups
        .iter()
        .filter(|group| group.is_plannable())
        .map(|group| GroupPlan {
            role: group.role,
            stock_length_mm: group.stock_length_mm,
            plan: optimize(
                group.stock_length_mm,
                &group.cuts_mm,
                settings.kerf_mm,
                settings.overcut_mm,
            ),
        })
        .collect();

    let totals = sum_totals(&windows, &corners, &plans);

    let mut validation = validate_document(doc);
    validation.merge(validate_corner_layouts(&corners));
    validation.merge(validate_groups(&groups));
    validation.merge(validate_plans(&plans));

    tracing::debug!(
        "Quoted {} window(s), {} corner(s), {} cutting group(s): total {:.2}",
        windows.len(),
        corners.len(),
        plans.len(),
        totals.total_cost
    );

    QuoteSummary {
        units: doc.units,
        settings,
        windows,
        corners,
        plans,
        totals,
        validation,
    }
}

fn sum_totals(
    windows: &[WindowResult],
    corners: &[CornerResult],
    plans: &[GroupPlan],
) -> QuoteTotals {
    let mut totals = QuoteTotals::default();

    for w in windows {
        totals.windows += u64::from(w.window.qty);
        totals.windows_cost += w.cost_total;
        totals.frame_length += w.frame.length_total;
        totals.frame_bars += w.frame.pieces_total;
        totals.lower_cornice_bars += w.lower_cornice.pieces_total;
        totals.upper_cornice_bars += w.upper_cornice.pieces_total;
    }

    for c in corners {
        totals.corner_blocks += c.total_pieces;
        totals.corners_cost += c.total_cost;
    }

    totals.cutting_waste_mm = plans.iter().map(|p| p.plan.total_waste).sum();
    totals.total_cost = totals.windows_cost + totals.corners_cost;
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{raw, BarSpec, CornerSpec, FrameMode, WindowSpec};

    fn classic_window() -> WindowSpec {
        WindowSpec {
            name: Some("Salon".to_string()),
            w: raw(150.0),
            h: raw(180.0),
            mode: Some(FrameMode::Full),
            frame: BarSpec {
                len_bar: raw(200.0),
                price_bar: raw(50.0),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_document() {
        let summary = quote_document(&QuoteDocument::new());
        assert!(summary.windows.is_empty());
        assert!(summary.plans.is_empty());
        assert_eq!(summary.totals, QuoteTotals::default());
        assert!(summary.validation.passed);
        assert_eq!(summary.validation.warnings.len(), 1);
    }

    #[test]
    fn test_cut_settings_in_mm() {
        let doc = QuoteDocument {
            kerf: raw("0,3"),
            overcut: raw(1.0),
            units: Unit::Centimeters,
            ..Default::default()
        };
        let settings = cut_settings(&doc);
        assert!((settings.kerf_mm - 3.0).abs() < 1e-9);
        assert!((settings.overcut_mm - 10.0).abs() < 1e-9);

        let doc = QuoteDocument {
            kerf: raw(3.0),
            units: Unit::Millimeters,
            ..Default::default()
        };
        assert_eq!(cut_settings(&doc).kerf_mm, 3.0);
    }

    #[test]
    fn test_quote_totals() {
        let doc = QuoteDocument {
            kerf: raw(3.0),
            units: Unit::Millimeters,
            windows: vec![classic_window()],
            corners: vec![CornerSpec::default()],
            ..Default::default()
        };

        let summary = quote_document(&doc);
        assert_eq!(summary.totals.windows, 1);
        assert_eq!(summary.totals.windows_cost, 200.0);
        assert_eq!(summary.totals.frame_bars, 4);
        assert_eq!(summary.totals.corner_blocks, 8);
        assert_eq!(summary.totals.corners_cost, 280.0);
        assert_eq!(summary.totals.total_cost, 480.0);

        // 1800, 1800, 1500, 1500 mm: none pair up within 2000 mm
        assert_eq!(summary.plans.len(), 1);
        assert_eq!(summary.plans[0].plan.bar_count(), 4);
        assert_eq!(summary.totals.cutting_waste_mm, 200.0 + 200.0 + 500.0 + 500.0);
        assert!(summary.validation.passed);
    }

    #[test]
    fn test_global_discount_fallback() {
        let doc = QuoteDocument {
            global_discount: raw(50.0),
            windows: vec![classic_window()],
            ..Default::default()
        };
        assert_eq!(quote_document(&doc).totals.windows_cost, 100.0);
    }

    #[test]
    fn test_aggregate_as_one_in_quote() {
        let mut spec = classic_window();
        spec.qty = raw(3u32);
        spec.aggregate_as_one = Some(true);
        let doc = QuoteDocument {
            windows: vec![spec],
            ..Default::default()
        };
        let summary = quote_document(&doc);
        assert_eq!(summary.totals.frame_bars, 10);
        assert_eq!(summary.totals.windows_cost, 500.0);
    }

    #[test]
    fn test_oversized_frame_cut_flagged() {
        let mut spec = classic_window();
        spec.h = raw(240.0);
        let doc = QuoteDocument {
            windows: vec![spec],
            ..Default::default()
        };
        let summary = quote_document(&doc);
        assert_eq!(summary.plans[0].plan.oversized, vec![2400.0, 2400.0]);
        assert!(!summary.validation.passed);
        assert_eq!(summary.validation.errors.len(), 2);
        // the quote itself is still produced
        assert_eq!(summary.windows.len(), 1);
    }

    #[test]
    fn test_huge_qty_skips_cutting_plan() {
        let mut spec = classic_window();
        spec.qty = raw(1e10);
        let doc = QuoteDocument {
            windows: vec![spec],
            ..Default::default()
        };

        let summary = quote_document(&doc);
        assert_eq!(summary.windows[0].window.qty, u32::MAX);
        assert_eq!(summary.totals.frame_bars, 4 * u64::from(u32::MAX));
        assert!(summary.plans.is_empty());
        assert_eq!(summary.totals.cutting_waste_mm, 0.0);
        assert!(summary.validation.passed);
        assert_eq!(summary.validation.warnings.len(), 1);
        assert!(summary.validation.warnings[0].contains("planning limit"));
    }
}
