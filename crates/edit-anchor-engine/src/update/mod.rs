//! # Range Updating
//!
//! Given a tracked range and an edit made somewhere in the document, work out
//! where the tracked text lies afterwards. Nothing here looks at the document
//! itself; the answer follows from the geometry of the edit alone.
//!
//! - [`update_range`]: elastic policy. The range grows and shrinks with edits
//!   made inside it and is clipped by edits that overlap one of its ends.
//! - [`update_fixed_range`]: the range keeps its size and only follows its
//!   start.
//! - [`update_range_multiple_changes`]: a batch of simultaneous edits, folded
//!   bottom of the document first.

mod batch;
mod fixed;

pub use batch::{
    update_fixed_range_multiple_changes, update_range_multiple_changes, validate_batch,
};
pub use fixed::update_fixed_range;

use crate::{Edit, EditDelta, Position, PositionEncoding, Range};

/// Knobs for the updaters. The default is the plain elastic behavior with
/// UTF-16 offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UpdateOptions {
    /// Let an insertion made exactly at either end of the range, containing no
    /// whitespace, extend the range instead of pushing it aside.
    pub support_range_affix: bool,
    /// Unit used to measure replacement text.
    pub encoding: PositionEncoding,
}

impl UpdateOptions {
    pub fn with_range_affix(mut self) -> Self {
        self.support_range_affix = true;
        self
    }

    pub fn with_encoding(mut self, encoding: PositionEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Outcome of running a tracked range through an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeUpdate {
    /// The range survived, possibly moved, resized or emptied.
    Moved(Range),
    /// The edit replaced the whole range. Only an empty location at the
    /// edit's start is left.
    Collapsed(Position),
}

impl RangeUpdate {
    /// The resulting range. A collapse yields an empty range at its position.
    pub fn range(self) -> Range {
        match self {
            RangeUpdate::Moved(range) => range,
            RangeUpdate::Collapsed(at) => Range::point(at),
        }
    }

    /// The resulting range, or `None` if the tracked text was consumed.
    pub fn live(self) -> Option<Range> {
        match self {
            RangeUpdate::Moved(range) => Some(range),
            RangeUpdate::Collapsed(_) => None,
        }
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, RangeUpdate::Collapsed(_))
    }
}

/// How an edit's replaced span sits against a tracked range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The span strictly surrounds the range, or replaces exactly it.
    Contains,
    /// The span covers the range's start but not its end.
    Start,
    /// The span covers the range's end but not its start.
    End,
    /// Neither end is covered. This includes spans nested wholly inside the
    /// range, spans merely touching it, and insertions at its boundary.
    Neither,
}

impl Overlap {
    pub fn classify(tracked: Range, replaced: Range) -> Self {
        let (a, b) = (tracked.start, tracked.end);
        let (s, e) = (replaced.start, replaced.end);

        // An exact-bounds replace counts as consumed, not as "the range now
        // covers the replacement".
        if (s < a && b < e) || (replaced == tracked && s < e) {
            Overlap::Contains
        } else if s <= a && a < e && b >= e {
            Overlap::Start
        } else if s < b && b <= e && a <= s {
            Overlap::End
        } else {
            Overlap::Neither
        }
    }
}

/// Move `tracked` through `edit` under the elastic policy.
///
/// Text replacing either end of the range is left outside it, and so is an
/// insertion made right at a boundary, unless
/// [`UpdateOptions::support_range_affix`] allows it in.
pub fn update_range(tracked: Range, edit: &Edit, options: UpdateOptions) -> RangeUpdate {
    debug_assert!(tracked.is_well_formed(), "inverted tracked range {tracked}");
    debug_assert!(
        edit.range.is_well_formed(),
        "inverted edit range {}",
        edit.range
    );

    let overlap = Overlap::classify(tracked, edit.range);
    log::trace!("edit {} vs tracked {tracked}: {overlap:?}", edit.range);

    let delta = edit.delta(options.encoding);
    match overlap {
        Overlap::Contains => RangeUpdate::Collapsed(edit.range.start),
        Overlap::Start => {
            RangeUpdate::Moved(Range::new(delta.mapped_end(), delta.map(tracked.end)))
        }
        Overlap::End => RangeUpdate::Moved(Range::new(tracked.start, edit.range.start)),
        Overlap::Neither => {
            let absorb = options.support_range_affix && is_affix(edit);
            let start = map_endpoint(tracked.start, &delta, Boundary::Start, absorb);
            // A point range on an insertion moves with its start.
            let end = map_endpoint(tracked.end, &delta, Boundary::End, absorb).max(start);
            RangeUpdate::Moved(Range::new(start, end))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Start,
    End,
}

/// An insertion that may glue onto a range boundary.
fn is_affix(edit: &Edit) -> bool {
    edit.is_insertion() && !edit.text.contains(char::is_whitespace)
}

/// Translate one endpoint that no replaced text overlaps.
fn map_endpoint(position: Position, delta: &EditDelta, side: Boundary, absorb: bool) -> Position {
    let replaced = delta.replaced();

    if replaced.is_empty() && position == replaced.start {
        let past_insertion = match side {
            Boundary::Start => !absorb,
            Boundary::End => absorb,
        };
        return if past_insertion {
            delta.mapped_end()
        } else {
            position
        };
    }

    if position.is_after_or_equal(replaced.end) {
        delta.map(position)
    } else {
        debug_assert!(
            position <= replaced.start,
            "endpoint {position} inside replaced span {replaced}"
        );
        position
    }
}
