//! First-fit descending packing of cut lengths into stock bars.

use crate::config::sanitize_allowance;
use crate::model::{CuttingPlan, StockBar};

/// Pack `cuts` into bars of `stock_length`.
///
/// Every cut is lengthened by `overcut`, the list is sorted longest first,
/// and each piece goes into the first existing bar (in creation order) with
/// room for it plus one `kerf`. Pieces that fit nowhere open a new bar.
/// Waste per bar is `stock_length - used`, rounded and floored at zero.
///
/// A piece longer than the stock bar still gets its own bar and is listed in
/// [`CuttingPlan::oversized`]. Non-finite cut lengths are dropped.
pub fn optimize(stock_length: f64, cuts: &[f64], kerf: f64, overcut: f64) -> CuttingPlan {
    let kerf = sanitize_allowance(kerf);
    let overcut = sanitize_allowance(overcut);

    let mut items: Vec<f64> = cuts
        .iter()
        .filter(|c| {
            let finite = c.is_finite();
            if !finite {
                tracing::warn!("Dropping non-finite cut length {}", c);
            }
            finite
        })
        .map(|c| c + overcut)
        .collect();
    items.sort_by(|a, b| b.total_cmp(a));

    let mut bars: Vec<StockBar> = Vec::new();
    let mut oversized = Vec::new();

    for len in items {
        if len > stock_length {
            tracing::warn!(
                "Cut of {} exceeds stock length {}; placing it alone",
                len,
                stock_length
            );
            oversized.push(len);
            bars.push(StockBar::with_part(len));
            continue;
        }

        match bars
            .iter_mut()
            .find(|bar| bar.fits(len, kerf, stock_length))
        {
            Some(bar) => bar.push(len, kerf),
            None => bars.push(StockBar::with_part(len)),
        }
    }

    for bar in &mut bars {
        bar.waste = (stock_length - bar.used).round().max(0.0);
    }
    let total_waste = bars.iter().map(|b| b.waste).sum();

    tracing::debug!(
        "Packed {} part(s) into {} bar(s) of {}, waste {}",
        bars.iter().map(|b| b.parts.len()).sum::<usize>(),
        bars.len(),
        stock_length,
        total_waste
    );

    CuttingPlan {
        stock_length,
        bars,
        total_waste,
        oversized,
    }
}
