use crate::{Edit, Range};

use super::UpdateOptions;

/// Move `tracked` through `edit` keeping its size.
///
/// Only the start is tracked: edits wholly before it shift it, anything at or
/// after it leaves it where it is. The end is then rebuilt from the range's
/// original extent, so edits inside the window change what it covers but never
/// how much. A start swallowed by the replaced span falls back to the span's
/// start. Range affix has no effect here.
pub fn update_fixed_range(tracked: Range, edit: &Edit, options: UpdateOptions) -> Range {
    debug_assert!(tracked.is_well_formed(), "inverted tracked range {tracked}");
    debug_assert!(
        edit.range.is_well_formed(),
        "inverted edit range {}",
        edit.range
    );

    let extent = tracked.extent();
    let replaced = edit.range;
    let start = if tracked.start <= replaced.start {
        tracked.start
    } else if tracked.start.is_after_or_equal(replaced.end) {
        edit.delta(options.encoding).map(tracked.start)
    } else {
        replaced.start
    };
    log::trace!("edit {replaced} vs fixed {tracked}: start {} -> {start}", tracked.start);

    Range::new(start, start.advance(extent))
}
