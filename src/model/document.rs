//! Saved quote document: everything needed to recompute a quote.

use serde::{Deserialize, Serialize};

use super::corner::CornerSpec;
use super::raw_number::RawNumber;
use super::window::WindowSpec;
use crate::config::{Unit, SCHEMA_VERSION};

/// A versioned quote document.
///
/// `kerf` and `overcut` are expressed in `units`; window and corner
/// geometry is always in centimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDocument {
    #[serde(rename = "_v")]
    pub version: String,
    /// Discount applied to windows that do not set their own.
    #[serde(default)]
    pub global_discount: Option<RawNumber>,
    #[serde(default)]
    pub kerf: Option<RawNumber>,
    #[serde(default)]
    pub overcut: Option<RawNumber>,
    #[serde(default)]
    pub units: Unit,
    #[serde(default)]
    pub windows: Vec<WindowSpec>,
    #[serde(default)]
    pub corners: Vec<CornerSpec>,
}

impl Default for QuoteDocument {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            global_discount: None,
            kerf: None,
            overcut: None,
            units: Unit::default(),
            windows: Vec::new(),
            corners: Vec::new(),
        }
    }
}

impl QuoteDocument {
    /// Create an empty document at the current schema version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has nothing to quote.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty() && self.corners.is_empty()
    }

    /// Major component of the version tag, if it can be read.
    pub fn schema_major(&self) -> Option<u32> {
        self.version.split('.').next()?.trim().parse().ok()
    }

    /// Window specs with document-level defaults filled in.
    pub fn resolved_windows(&self) -> Vec<WindowSpec> {
        let defaults = WindowSpec {
            discount: self.global_discount.clone(),
            ..Default::default()
        };
        self.windows
            .iter()
            .map(|w| w.merged_over(&defaults))
            .collect()
    }
}
