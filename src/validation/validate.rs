//! Advisory checks for quote documents and cutting plans.
//!
//! Nothing here stops a quote from being computed. Warnings describe input
//! that was replaced by defaults; errors describe requirements that cannot
//! actually be met, such as a cut longer than its stock bar.

use serde::{Deserialize, Serialize};

use crate::config::MAX_PLAN_CUTS;
use crate::model::{
    CornerResult, CornerSpec, CutGroup, GroupPlan, QuoteDocument, RawNumber, WindowSpec,
};
use crate::parser::{is_unparseable, parse_number};

/// Validation result with warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a whole document.
pub fn validate_document(doc: &QuoteDocument) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if doc.is_empty() {
        result.add_warning("Document has no windows or corners");
    }

    check_fields(
        &mut result,
        "Document",
        &[
            ("global_discount", doc.global_discount.as_ref()),
            ("kerf", doc.kerf.as_ref()),
            ("overcut", doc.overcut.as_ref()),
        ],
    );

    for (idx, window) in doc.windows.iter().enumerate() {
        result.merge(validate_window(window, idx + 1));
    }

    for (idx, corner) in doc.corners.iter().enumerate() {
        result.merge(validate_corner(corner, idx + 1));
    }

    result
}

/// Validate a single window spec.
pub fn validate_window(spec: &WindowSpec, window_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = format!("Window {}", window_num);

    check_fields(
        &mut result,
        &label,
        &[
            ("w", spec.w.as_ref()),
            ("h", spec.h.as_ref()),
            ("qty", spec.qty.as_ref()),
            ("discount", spec.discount.as_ref()),
            ("frame.len_bar", spec.frame.len_bar.as_ref()),
            ("frame.price_bar", spec.frame.price_bar.as_ref()),
            ("lower_cornice.len_bar", spec.lower_cornice.len_bar.as_ref()),
            ("lower_cornice.price_bar", spec.lower_cornice.price_bar.as_ref()),
            ("upper_cornice.len_bar", spec.upper_cornice.len_bar.as_ref()),
            ("upper_cornice.price_bar", spec.upper_cornice.price_bar.as_ref()),
            ("keystone.qty", spec.keystone.qty.as_ref()),
            ("keystone.price", spec.keystone.price.as_ref()),
            ("top_brackets.qty", spec.top_brackets.qty.as_ref()),
            ("top_brackets.price", spec.top_brackets.price.as_ref()),
            ("bottom_brackets.qty", spec.bottom_brackets.qty.as_ref()),
            ("bottom_brackets.price", spec.bottom_brackets.price.as_ref()),
        ],
    );

    if let Some(discount) = spec.discount.as_ref().and_then(parse_number) {
        if !(0.0..=100.0).contains(&discount) {
            result.add_warning(format!(
                "{}: discount {}% clamped to [0, 100]",
                label, discount
            ));
        }
    }

    result
}

/// Validate a single corner spec.
pub fn validate_corner(spec: &CornerSpec, corner_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let label = format!("Corner {}", corner_num);

    check_fields(
        &mut result,
        &label,
        &[
            ("wall_height", spec.wall_height.as_ref()),
            ("qty", spec.qty.as_ref()),
            ("block_a.height", spec.block_a.height.as_ref()),
            ("block_a.width", spec.block_a.width.as_ref()),
            ("block_a.price", spec.block_a.price.as_ref()),
            ("block_b.height", spec.block_b.height.as_ref()),
            ("block_b.width", spec.block_b.width.as_ref()),
            ("block_b.price", spec.block_b.price.as_ref()),
            ("top_margin", spec.top_margin.as_ref()),
            ("bottom_margin", spec.bottom_margin.as_ref()),
            ("gap", spec.gap.as_ref()),
        ],
    );

    result
}

/// Report every cut that is longer than its stock bar.
pub fn validate_plans(plans: &[GroupPlan]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for group in plans {
        for len in &group.plan.oversized {
            result.add_error(format!(
                "{} cut of {} mm exceeds the {} mm stock bar",
                group.role, len, group.stock_length_mm
            ));
        }
    }

    result
}

/// Report corners whose stacking stopped at the iteration cap.
pub fn validate_corner_layouts(corners: &[CornerResult]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, corner) in corners.iter().enumerate() {
        if corner.layout.capped {
            result.add_warning(format!(
                "Corner {}: stacking stopped after {} blocks, count may be short",
                idx + 1,
                corner.pieces_per_wall
            ));
        }
    }

    result
}

/// Report cut groups too large to be packed into a cutting plan.
pub fn validate_groups(groups: &[CutGroup]) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for group in groups.iter().filter(|g| !g.is_plannable()) {
        result.add_warning(format!(
            "{} @ {} mm: {} pieces exceed the {}-piece planning limit, no cutting plan",
            group.role, group.stock_length_mm, group.piece_count, MAX_PLAN_CUTS
        ));
    }

    result
}

fn check_fields(
    result: &mut ValidationResult,
    label: &str,
    fields: &[(&str, Option<&RawNumber>)],
) {
    for (name, raw) in fields {
        if is_unparseable(*raw) {
            if let Some(value) = raw {
                result.add_warning(format!(
                    "{}: '{}' is not a number for {}, using default",
                    label, value, name
                ));
            }
        }
    }
}
