//! Cut groups and cutting plans for 1-D stock bars.

use serde::{Deserialize, Serialize};

use crate::config::MAX_PLAN_CUTS;

/// Which part of a window a stock bar is bought for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaterialRole {
    #[serde(rename = "frame")]
    Frame,
    #[serde(rename = "lower_cornice")]
    LowerCornice,
    #[serde(rename = "upper_cornice")]
    UpperCornice,
}

impl std::fmt::Display for MaterialRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialRole::Frame => write!(f, "frame"),
            MaterialRole::LowerCornice => write!(f, "lower cornice"),
            MaterialRole::UpperCornice => write!(f, "upper cornice"),
        }
    }
}

/// All cuts needed from one kind of stock bar, in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutGroup {
    pub role: MaterialRole,
    pub stock_length_mm: f64,
    /// One entry per physical piece. Left empty when `piece_count` is over
    /// [`MAX_PLAN_CUTS`].
    pub cuts_mm: Vec<f64>,
    /// Physical pieces requested from this stock, whether listed or not.
    pub piece_count: u64,
}

impl CutGroup {
    /// Whether the group is small enough to be packed into bars.
    pub fn is_plannable(&self) -> bool {
        self.piece_count <= MAX_PLAN_CUTS
    }
}

/// A stock bar with the cuts assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBar {
    /// Cut lengths in placement order (overcut included).
    pub parts: Vec<f64>,
    /// Length consumed by parts and kerf.
    pub used: f64,
    /// Unused length, rounded and never negative.
    pub waste: f64,
}

impl StockBar {
    /// Open a bar holding a single part.
    pub fn with_part(length: f64) -> Self {
        Self {
            parts: vec![length],
            used: length,
            waste: 0.0,
        }
    }

    /// Length a new part would consume, including kerf after the first part.
    pub fn cost_of(&self, length: f64, kerf: f64) -> f64 {
        let extra = if self.parts.is_empty() { 0.0 } else { kerf };
        extra + length
    }

    /// Check if a part fits in the remaining stock.
    pub fn fits(&self, length: f64, kerf: f64, stock_length: f64) -> bool {
        self.used + self.cost_of(length, kerf) <= stock_length
    }

    /// Append a part, charging kerf if the bar already has one.
    pub fn push(&mut self, length: f64, kerf: f64) {
        self.used += self.cost_of(length, kerf);
        self.parts.push(length);
    }

    /// Sum of part lengths without kerf.
    pub fn parts_length(&self) -> f64 {
        self.parts.iter().sum()
    }
}

/// Result of packing a cut group into stock bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuttingPlan {
    pub stock_length: f64,
    pub bars: Vec<StockBar>,
    pub total_waste: f64,
    /// Parts longer than the stock bar. Each sits alone in its own bar.
    pub oversized: Vec<f64>,
}

impl CuttingPlan {
    /// Number of stock bars to buy.
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Whether any part cannot actually be cut from one bar.
    pub fn has_oversized(&self) -> bool {
        !self.oversized.is_empty()
    }
}

/// A cutting plan together with the group it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPlan {
    pub role: MaterialRole,
    pub stock_length_mm: f64,
    pub plan: CuttingPlan,
}
