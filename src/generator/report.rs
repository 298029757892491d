//! Plain-text quote report.

use std::fmt::Write;

use super::format::{format_length, format_money};
use crate::config::Unit;
use crate::model::{CornerResult, GroupPlan, WindowResult};
use crate::quote::{QuoteSummary, QuoteTotals};

/// Render a quote summary as a plain-text report.
pub fn generate_report(summary: &QuoteSummary) -> String {
    let mut output = String::new();

    generate_windows_section(&mut output, &summary.windows);
    generate_corners_section(&mut output, &summary.corners);
    generate_cutting_section(&mut output, &summary.plans, summary.units);
    generate_totals_section(&mut output, &summary.totals);

    if !summary.validation.warnings.is_empty() || !summary.validation.errors.is_empty() {
        writeln!(output, "[NOTES]").unwrap();
        for error in &summary.validation.errors {
            writeln!(output, "! {}", error).unwrap();
        }
        for warning in &summary.validation.warnings {
            writeln!(output, "- {}", warning).unwrap();
        }
        writeln!(output).unwrap();
    }

    output
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Generate the [WINDOWS] section.
fn generate_windows_section(output: &mut String, windows: &[WindowResult]) {
    writeln!(output, "[WINDOWS]").unwrap();
    writeln!(
        output,
        "#  | name | size | qty | mode | lower | upper | frame cm | frame bars | discount | cost"
    )
    .unwrap();

    for (idx, result) in windows.iter().enumerate() {
        let w = &result.window;
        let name = if w.name.is_empty() { "-" } else { w.name.as_str() };
        writeln!(
            output,
            "{} | {} | {}x{} | {} | {} | {} | {} | {} | {}{} | {}% | {}",
            idx + 1,
            name,
            w.width,
            w.height,
            w.qty,
            w.mode,
            yes_no(w.lower_cornice.enabled),
            yes_no(w.upper_cornice.enabled),
            result.frame.length.round(),
            result.frame.pieces_total,
            if result.aggregated { " (run)" } else { "" },
            w.discount,
            format_money(result.cost_total)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
}

/// Generate the [CORNERS] section.
fn generate_corners_section(output: &mut String, corners: &[CornerResult]) {
    if corners.is_empty() {
        return;
    }

    writeln!(output, "[CORNERS]").unwrap();
    writeln!(output, "#  | name | wall | usable | A | B | per wall | walls | cost").unwrap();

    for (idx, result) in corners.iter().enumerate() {
        let c = &result.corner;
        let name = if c.name.is_empty() { "-" } else { c.name.as_str() };
        writeln!(
            output,
            "{} | {} | {} | {} | {} | {} | {} | {} | {}",
            idx + 1,
            name,
            c.wall_height,
            result.usable,
            result.pieces_a,
            result.pieces_b,
            result.pieces_per_wall,
            c.qty,
            format_money(result.total_cost)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
}

/// Generate one [CUTTING] section per material group.
fn generate_cutting_section(output: &mut String, plans: &[GroupPlan], unit: Unit) {
    for group in plans {
        writeln!(
            output,
            "[CUTTING {} @ {}]",
            group.role,
            format_length(group.stock_length_mm, unit)
        )
        .unwrap();

        for (idx, bar) in group.plan.bars.iter().enumerate() {
            let parts: Vec<String> = bar
                .parts
                .iter()
                .map(|p| format_length(*p, unit))
                .collect();
            writeln!(
                output,
                "bar {}: {} | waste {}",
                idx + 1,
                parts.join(" + "),
                format_length(bar.waste, unit)
            )
            .unwrap();
        }

        writeln!(
            output,
            "bars: {} | waste: {}",
            group.plan.bar_count(),
            format_length(group.plan.total_waste, unit)
        )
        .unwrap();
        writeln!(output).unwrap();
    }
}

/// Generate the [TOTALS] section.
fn generate_totals_section(output: &mut String, totals: &QuoteTotals) {
    writeln!(output, "[TOTALS]").unwrap();
    writeln!(output, "windows: {}", totals.windows).unwrap();
    writeln!(output, "frame length: {} cm", totals.frame_length.round()).unwrap();
    writeln!(output, "frame bars: {}", totals.frame_bars).unwrap();
    writeln!(
        output,
        "cornice bars: {} lower, {} upper",
        totals.lower_cornice_bars, totals.upper_cornice_bars
    )
    .unwrap();
    writeln!(output, "corner blocks: {}", totals.corner_blocks).unwrap();
    writeln!(output, "windows cost: {}", format_money(totals.windows_cost)).unwrap();
    writeln!(output, "corners cost: {}", format_money(totals.corners_cost)).unwrap();
    writeln!(output, "total: {}", format_money(totals.total_cost)).unwrap();
    writeln!(output).unwrap();
}
