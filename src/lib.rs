//! trim-quote - Quantity, cost and cutting-plan calculator for window trim.
//!
//! This library computes material lengths, bar counts and costs for window
//! frame trim with optional cornices and accessories, stacks decorative
//! corner blocks along walls, and packs the required cuts into stock bars.
//!
//! # Example
//!
//! ```
//! use trim_quote::{calculate_window, optimize, FrameMode, WindowSpec, BarSpec, raw};
//!
//! let result = calculate_window(&WindowSpec {
//!     w: raw(150.0),
//!     h: raw(180.0),
//!     mode: Some(FrameMode::Full),
//!     frame: BarSpec { len_bar: raw(200.0), price_bar: raw(50.0) },
//!     ..Default::default()
//! });
//! assert_eq!(result.frame.length, 660.0);
//! assert_eq!(result.frame.pieces, 4);
//!
//! let plan = optimize(2000.0, &[1200.0, 900.0, 700.0, 500.0], 3.0, 0.0);
//! assert_eq!(plan.total_waste, 694.0);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod quote;
pub mod validation;

// Re-exports for convenience
pub use calculator::{calculate_corner, calculate_window};
pub use config::{CutSettings, Unit};
pub use error::{QuoteError, Result};
pub use generator::{format_length, format_money, generate_report};
pub use model::{
    raw, BarSpec, CornerResult, CornerSpec, CuttingPlan, FrameMode, QuoteDocument, RawNumber,
    WindowResult, WindowSpec,
};
pub use optimizer::optimize;
pub use parser::{parse_clamped_number, parse_document_file};
pub use quote::{quote_document, QuoteSummary};
pub use validation::ValidationResult;

/// Load a quote document and compute the full quote.
///
/// This is the main high-level function that performs the whole pipeline:
/// 1. Parse the JSON document
/// 2. Calculate every window and corner
/// 3. Group cuts and pack them into stock bars
/// 4. Collect advisories
pub fn quote_file(input_path: &std::path::Path) -> Result<QuoteSummary> {
    let doc = parse_document_file(input_path)?;
    let summary = quote_document(&doc);

    for warning in &summary.validation.warnings {
        tracing::warn!("{}", warning);
    }

    Ok(summary)
}
