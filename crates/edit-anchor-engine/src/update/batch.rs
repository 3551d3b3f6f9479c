use std::cmp::Ordering;

use crate::error::{EditError, EditResult};
use crate::{Edit, Range};

use super::{RangeUpdate, UpdateOptions, update_fixed_range, update_range};

/// Move `tracked` through a batch of simultaneous edits.
///
/// The edits are given in the coordinates of the document before any of them
/// applied and must not overlap. They are folded bottom of the document first,
/// so applying one never disturbs the coordinates of those still to come. The
/// order of `edits` does not matter.
///
/// If any edit collapses the range, the remaining edits still move the empty
/// remainder and the result is [`RangeUpdate::Collapsed`] at its final spot.
pub fn update_range_multiple_changes(
    tracked: Range,
    edits: &[Edit],
    options: UpdateOptions,
) -> RangeUpdate {
    let mut current = tracked;
    let mut collapsed = false;
    for edit in bottom_up(edits) {
        let update = update_range(current, edit, options);
        collapsed |= update.is_collapsed();
        current = update.range();
    }

    if collapsed {
        RangeUpdate::Collapsed(current.start)
    } else {
        RangeUpdate::Moved(current)
    }
}

/// [`update_fixed_range`] over a batch of simultaneous edits.
pub fn update_fixed_range_multiple_changes(
    tracked: Range,
    edits: &[Edit],
    options: UpdateOptions,
) -> Range {
    bottom_up(edits).into_iter().fold(tracked, |current, edit| {
        update_fixed_range(current, edit, options)
    })
}

/// Check that a batch is well formed: no inverted spans, no overlaps.
///
/// Edits may touch, and several insertions may share a position.
pub fn validate_batch(edits: &[Edit]) -> EditResult<()> {
    if let Some(edit) = edits.iter().find(|edit| !edit.range.is_well_formed()) {
        return Err(EditError::InvertedRange {
            start: edit.range.start,
            end: edit.range.end,
        });
    }
    check_disjoint(&sorted_bottom_up(edits))
}

fn bottom_up(edits: &[Edit]) -> Vec<&Edit> {
    let sorted = sorted_bottom_up(edits);
    debug_assert!(
        check_disjoint(&sorted).is_ok(),
        "overlapping edits in batch: {:?}",
        check_disjoint(&sorted)
    );
    sorted
}

/// Sort by start descending. Ties go to the longer span first so an insertion
/// at a replaced span's start is applied after the replacement; the text
/// breaks the last ties so the order never depends on the input.
fn sorted_bottom_up(edits: &[Edit]) -> Vec<&Edit> {
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by(|a, b| bottom_up_order(a, b));
    sorted
}

fn bottom_up_order(a: &Edit, b: &Edit) -> Ordering {
    b.range
        .start
        .cmp(&a.range.start)
        .then_with(|| b.range.end.cmp(&a.range.end))
        .then_with(|| b.text.cmp(&a.text))
}

fn check_disjoint(sorted: &[&Edit]) -> EditResult<()> {
    for pair in sorted.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if upper.range.end > lower.range.start {
            return Err(EditError::OverlappingEdits {
                first: upper.range,
                second: lower.range,
            });
        }
    }
    Ok(())
}
