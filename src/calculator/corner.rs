//! Decorative corner block stacking and cost calculation.

use crate::config::{
    float_cmp, DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_HEIGHT_B, DEFAULT_BLOCK_PRICE,
    DEFAULT_BLOCK_WIDTH, DEFAULT_BLOCK_WIDTH_B, DEFAULT_GAP, DEFAULT_MARGIN, DEFAULT_WALL_HEIGHT,
    MIN_BLOCK_DIMENSION, STACK_EPS,
};
use crate::model::{
    Block, BlockKind, BlockPlacement, BlockSpec, Corner, CornerResult, CornerSpec, StackLayout,
};
use crate::parser::{parse_clamped_number, parse_count};

const MAX: f64 = f64::MAX;

/// Absolute ceiling on stacking iterations, whatever the wall height.
pub const MAX_STACK_ITERATIONS: usize = 1_000_000;

/// Normalize a raw corner: parse every field, fall back, clamp.
pub fn normalize_corner(spec: &CornerSpec) -> Corner {
    Corner {
        name: spec.name.clone().unwrap_or_default(),
        wall_height: parse_clamped_number(spec.wall_height.as_ref(), DEFAULT_WALL_HEIGHT, 1.0, MAX),
        qty: parse_count(spec.qty.as_ref(), 1.0, 1),
        block_a: normalize_block(&spec.block_a, DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH),
        alternating: spec.alternating.unwrap_or(false),
        block_b: normalize_block(&spec.block_b, DEFAULT_BLOCK_HEIGHT_B, DEFAULT_BLOCK_WIDTH_B),
        top_margin: parse_clamped_number(spec.top_margin.as_ref(), DEFAULT_MARGIN, 0.0, MAX),
        bottom_margin: parse_clamped_number(spec.bottom_margin.as_ref(), DEFAULT_MARGIN, 0.0, MAX),
        gap: parse_clamped_number(spec.gap.as_ref(), DEFAULT_GAP, 0.0, MAX),
    }
}

fn normalize_block(spec: &BlockSpec, default_height: f64, default_width: f64) -> Block {
    Block {
        height: parse_clamped_number(
            spec.height.as_ref(),
            default_height,
            MIN_BLOCK_DIMENSION,
            MAX,
        ),
        width: parse_clamped_number(spec.width.as_ref(), default_width, MIN_BLOCK_DIMENSION, MAX),
        price: parse_clamped_number(spec.price.as_ref(), DEFAULT_BLOCK_PRICE, 0.0, MAX),
    }
}

/// Iteration cap for a usable span: `ceil(usable / 0.1) + 2`.
pub fn stack_iteration_cap(usable: f64) -> usize {
    let cap = (usable / MIN_BLOCK_DIMENSION).ceil() as usize;
    cap.saturating_add(2).min(MAX_STACK_ITERATIONS)
}

/// Simulate stacking blocks from the top of the usable span.
///
/// A block is placed while it fits; a gap follows each block only if there
/// is room for it. With `alternating` set, positions alternate A, B, A, ...
pub fn stack_blocks(corner: &Corner) -> StackLayout {
    let usable = corner.usable_height();
    let cap = stack_iteration_cap(usable);
    let mut layout = StackLayout::default();
    let mut y = 0.0;
    let mut kind = BlockKind::A;
    let mut finished = false;

    while layout.iterations < cap {
        layout.iterations += 1;

        let h = corner.block(kind).height;
        if float_cmp::exceeds(y + h, usable, STACK_EPS) {
            finished = true;
            break;
        }

        match kind {
            BlockKind::A => layout.pieces_a += 1,
            BlockKind::B => layout.pieces_b += 1,
        }
        layout.placements.push(BlockPlacement {
            kind,
            offset: y,
            height: h,
        });
        y += h;

        if float_cmp::exceeds(y + corner.gap, usable, STACK_EPS) {
            finished = true;
            break;
        }
        y += corner.gap;

        if corner.alternating {
            kind = match kind {
                BlockKind::A => BlockKind::B,
                BlockKind::B => BlockKind::A,
            };
        }
    }

    if !finished {
        layout.capped = true;
        tracing::warn!(
            "Corner '{}': stacking stopped at iteration cap {} (usable {} cm)",
            corner.name,
            cap,
            usable
        );
    }

    layout
}

/// Compute block counts and costs for one corner.
///
/// Never fails: invalid fields fall back to their defaults first.
pub fn calculate_corner(spec: &CornerSpec) -> CornerResult {
    let corner = normalize_corner(spec);
    let usable = corner.usable_height();
    let layout = stack_blocks(&corner);

    let pieces_a = layout.pieces_a;
    let pieces_b = layout.pieces_b;
    let pieces_per_wall = pieces_a + pieces_b;
    let qty = u64::from(corner.qty);

    let cost_per_wall = pieces_a as f64 * corner.block_a.price
        + pieces_b as f64 * corner.block(BlockKind::B).price;

    tracing::debug!(
        "Corner '{}': usable {} cm, {} A + {} B block(s) per wall",
        corner.name,
        usable,
        pieces_a,
        pieces_b
    );

    CornerResult {
        usable,
        pieces_a,
        pieces_b,
        pieces_per_wall,
        total_pieces: pieces_per_wall.saturating_mul(qty),
        cost_per_wall,
        total_cost: cost_per_wall * f64::from(corner.qty),
        layout,
        corner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw;

    fn block(height: f64, width: f64, price: f64) -> BlockSpec {
        BlockSpec {
            height: raw(height),
            width: raw(width),
            price: raw(price),
        }
    }

    fn corner(wall: f64, top: f64, bottom: f64, gap: f64) -> CornerSpec {
        CornerSpec {
            wall_height: raw(wall),
            qty: raw(1u32),
            block_a: block(25.0, 30.0, 35.0),
            top_margin: raw(top),
            bottom_margin: raw(bottom),
            gap: raw(gap),
            ..Default::default()
        }
    }

    // ==================== Normalization tests ====================

    #[test]
    fn test_normalize_defaults() {
        let c = normalize_corner(&CornerSpec::default());
        assert_eq!(c.wall_height, 300.0);
        assert_eq!(c.block_a.height, 25.0);
        assert_eq!(c.block_a.width, 30.0);
        assert_eq!(c.block_a.price, 35.0);
        assert_eq!(c.block_b.height, 15.0);
        assert_eq!(c.block_b.width, 20.0);
        assert_eq!(c.top_margin, 20.0);
        assert_eq!(c.bottom_margin, 20.0);
        assert_eq!(c.gap, 5.0);
        assert_eq!(c.qty, 1);
        assert!(!c.alternating);
    }

    #[test]
    fn test_normalize_clamps_block_dimensions() {
        let c = normalize_corner(&CornerSpec {
            block_a: block(0.0, -1.0, -3.0),
            gap: raw(-2.0),
            ..Default::default()
        });
        assert_eq!(c.block_a.height, MIN_BLOCK_DIMENSION);
        assert_eq!(c.block_a.width, MIN_BLOCK_DIMENSION);
        assert_eq!(c.block_a.price, 0.0);
        assert_eq!(c.gap, 0.0);
    }

    // ==================== Stacking tests ====================

    #[test]
    fn test_reference_wall() {
        let result = calculate_corner(&corner(300.0, 20.0, 20.0, 5.0));
        assert_eq!(result.usable, 260.0);
        assert_eq!(result.pieces_a, 8);
        assert_eq!(result.pieces_b, 0);
        assert_eq!(result.pieces_per_wall, 8);
        assert_eq!(result.total_cost, 280.0);
    }

    #[test]
    fn test_last_block_without_trailing_gap() {
        // 4 x 25 + 3 x 5 = 115: the fourth block fits exactly, no gap after it
        let result = calculate_corner(&corner(155.0, 20.0, 20.0, 5.0));
        assert_eq!(result.usable, 115.0);
        assert_eq!(result.pieces_a, 4);
    }

    #[test]
    fn test_float_accumulation_tolerated() {
        // ten blocks of 0.1 with no gap fill 1.0 despite rounding drift
        let mut spec = corner(1.0, 0.0, 0.0, 0.0);
        spec.block_a = block(0.1, 1.0, 1.0);
        let result = calculate_corner(&spec);
        assert_eq!(result.pieces_a, 10);
        assert!(!result.layout.capped);
    }

    #[test]
    fn test_zero_usable() {
        let result = calculate_corner(&corner(30.0, 20.0, 20.0, 5.0));
        assert_eq!(result.usable, 0.0);
        assert_eq!(result.pieces_per_wall, 0);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_alternating_blocks() {
        let mut spec = corner(300.0, 20.0, 20.0, 5.0);
        spec.alternating = Some(true);
        spec.block_b = block(15.0, 20.0, 20.0);
        let result = calculate_corner(&spec);

        // cycle A+gap+B+gap = 50 cm: 5 cycles = 250, then A (25) no longer fits in 10
        assert_eq!(result.pieces_a, 5);
        assert_eq!(result.pieces_b, 5);
        assert_eq!(result.cost_per_wall, 5.0 * 35.0 + 5.0 * 20.0);
        assert_eq!(result.layout.placements[1].kind, BlockKind::B);
        assert_eq!(result.layout.placements[1].offset, 30.0);
    }

    #[test]
    fn test_non_alternating_ignores_block_b() {
        let mut spec = corner(300.0, 20.0, 20.0, 5.0);
        spec.block_b = block(15.0, 20.0, 99.0);
        let result = calculate_corner(&spec);
        assert_eq!(result.pieces_b, 0);
        assert_eq!(
            result.cost_per_wall,
            result.pieces_a as f64 * result.corner.block_a.price
        );
    }

    #[test]
    fn test_qty_multiplies_totals() {
        let mut spec = corner(300.0, 20.0, 20.0, 5.0);
        spec.qty = raw(4u32);
        let result = calculate_corner(&spec);
        assert_eq!(result.total_pieces, 32);
        assert_eq!(result.total_cost, 1120.0);
    }

    #[test]
    fn test_iterations_bounded() {
        let cases = [
            corner(300.0, 20.0, 20.0, 5.0),
            corner(1.0, 0.0, 0.0, 0.0),
            corner(5000.0, 0.0, 0.0, 0.0),
            CornerSpec {
                block_a: block(0.0, 0.0, 0.0),
                gap: raw(0.0),
                ..Default::default()
            },
        ];
        for spec in cases {
            let c = normalize_corner(&spec);
            let usable = c.usable_height();
            let layout = stack_blocks(&c);
            assert!(layout.iterations <= (usable / 0.1).ceil() as usize + 2);
            assert!(!layout.capped);
        }
    }

    #[test]
    fn test_iteration_cap() {
        assert_eq!(stack_iteration_cap(0.0), 2);
        assert_eq!(stack_iteration_cap(260.0), 2602);
        assert_eq!(stack_iteration_cap(1e300), MAX_STACK_ITERATIONS);
    }
}
