//! Decorative corner item: blocks stacked along a wall edge.

use serde::{Deserialize, Serialize};

use super::raw_number::RawNumber;

/// Raw dimensions and price of one block type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockSpec {
    pub height: Option<RawNumber>,
    pub width: Option<RawNumber>,
    pub price: Option<RawNumber>,
}

/// Raw corner input. Missing or unparseable values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerSpec {
    pub name: Option<String>,
    pub wall_height: Option<RawNumber>,
    pub qty: Option<RawNumber>,
    pub block_a: BlockSpec,
    /// Alternate block A with block B on every other position.
    pub alternating: Option<bool>,
    pub block_b: BlockSpec,
    pub top_margin: Option<RawNumber>,
    pub bottom_margin: Option<RawNumber>,
    pub gap: Option<RawNumber>,
}

/// Normalized block type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Height along the wall (cm), at least 0.1.
    pub height: f64,
    /// Width (cm), at least 0.1.
    pub width: f64,
    pub price: f64,
}

/// A fully normalized corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub name: String,
    pub wall_height: f64,
    pub qty: u32,
    pub block_a: Block,
    pub alternating: bool,
    pub block_b: Block,
    pub top_margin: f64,
    pub bottom_margin: f64,
    pub gap: f64,
}

impl Corner {
    /// Wall span available for blocks, never negative.
    pub fn usable_height(&self) -> f64 {
        (self.wall_height - self.top_margin - self.bottom_margin).max(0.0)
    }

    /// Block placed at a position of the given kind.
    pub fn block(&self, kind: BlockKind) -> &Block {
        match kind {
            BlockKind::A => &self.block_a,
            BlockKind::B if self.alternating => &self.block_b,
            BlockKind::B => &self.block_a,
        }
    }
}

impl From<&Block> for BlockSpec {
    fn from(block: &Block) -> Self {
        BlockSpec {
            height: Some(RawNumber::Number(block.height)),
            width: Some(RawNumber::Number(block.width)),
            price: Some(RawNumber::Number(block.price)),
        }
    }
}

impl From<&Corner> for CornerSpec {
    fn from(corner: &Corner) -> Self {
        CornerSpec {
            name: Some(corner.name.clone()),
            wall_height: Some(RawNumber::Number(corner.wall_height)),
            qty: Some(RawNumber::from(corner.qty)),
            block_a: BlockSpec::from(&corner.block_a),
            alternating: Some(corner.alternating),
            block_b: BlockSpec::from(&corner.block_b),
            top_margin: Some(RawNumber::Number(corner.top_margin)),
            bottom_margin: Some(RawNumber::Number(corner.bottom_margin)),
            gap: Some(RawNumber::Number(corner.gap)),
        }
    }
}

/// Block type at a stacking position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    A,
    B,
}

/// One placed block, measured from the top of the usable span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPlacement {
    pub kind: BlockKind,
    pub offset: f64,
    pub height: f64,
}

/// Outcome of stacking blocks along one wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackLayout {
    pub placements: Vec<BlockPlacement>,
    pub pieces_a: u64,
    pub pieces_b: u64,
    /// Loop iterations used by the simulation.
    pub iterations: usize,
    /// Set when the iteration cap stopped the simulation.
    pub capped: bool,
}

/// Quantities and costs derived from one corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerResult {
    /// The normalized input.
    pub corner: Corner,
    pub usable: f64,
    pub layout: StackLayout,
    pub pieces_a: u64,
    pub pieces_b: u64,
    /// Blocks on one wall.
    pub pieces_per_wall: u64,
    /// Blocks on all `qty` walls.
    pub total_pieces: u64,
    /// Cost of one wall.
    pub cost_per_wall: f64,
    /// Cost of all `qty` walls.
    pub total_cost: f64,
}
