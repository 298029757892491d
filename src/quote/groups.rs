//! Grouping of window cut requirements by material and stock length.

use std::collections::BTreeMap;

use crate::calculator::cornice_length;
use crate::config::{Unit, MAX_PLAN_CUTS};
use crate::model::{CutGroup, MaterialRole, WindowResult};

/// Key for a group: role plus stock length in whole micrometers.
type GroupKey = (MaterialRole, i64);

fn group_key(role: MaterialRole, stock_length_mm: f64) -> GroupKey {
    (role, (stock_length_mm * 1000.0).round() as i64)
}

/// Repeated cuts of one length, collected before the group is expanded.
struct PendingGroup {
    role: MaterialRole,
    stock_length_mm: f64,
    runs: Vec<(f64, u32)>,
    piece_count: u64,
}

impl PendingGroup {
    fn into_group(self) -> CutGroup {
        let mut cuts_mm = Vec::new();
        if self.piece_count <= MAX_PLAN_CUTS {
            cuts_mm.reserve(self.piece_count as usize);
            for (length_mm, count) in self.runs {
                cuts_mm.extend(std::iter::repeat(length_mm).take(count as usize));
            }
        }
        CutGroup {
            role: self.role,
            stock_length_mm: self.stock_length_mm,
            cuts_mm,
            piece_count: self.piece_count,
        }
    }
}

/// Collect every physical piece needed by `results` into cut groups.
///
/// Window geometry is in centimeters; groups are returned in millimeters,
/// ordered by role and then stock length. Frame pieces follow the frame
/// mode (one cut per trimmed edge); each enabled cornice is one cut.
///
/// Groups with more than [`MAX_PLAN_CUTS`] pieces keep their count but
/// list no cuts.
pub fn build_cut_groups(results: &[WindowResult]) -> Vec<CutGroup> {
    let cm = Unit::Centimeters;
    let mut groups: BTreeMap<GroupKey, PendingGroup> = BTreeMap::new();

    let mut add = |role: MaterialRole, stock_cm: f64, length_cm: f64, count: u32| {
        let stock_mm = cm.to_mm(stock_cm);
        let group = groups
            .entry(group_key(role, stock_mm))
            .or_insert_with(|| PendingGroup {
                role,
                stock_length_mm: stock_mm,
                runs: Vec::new(),
                piece_count: 0,
            });
        group.runs.push((cm.to_mm(length_cm), count));
        group.piece_count = group.piece_count.saturating_add(u64::from(count));
    };

    for result in results {
        let window = &result.window;

        for piece in window.mode.frame_pieces(window.width, window.height) {
            add(MaterialRole::Frame, window.frame.length, piece, window.qty);
        }

        for (role, cornice) in [
            (MaterialRole::LowerCornice, &window.lower_cornice),
            (MaterialRole::UpperCornice, &window.upper_cornice),
        ] {
            if cornice.enabled {
                add(
                    role,
                    cornice.bar.length,
                    cornice_length(window.width, cornice),
                    window.qty,
                );
            }
        }
    }

    groups.into_values().map(PendingGroup::into_group).collect()
}
