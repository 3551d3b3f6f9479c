use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(line, character)` coordinate in a document, both 0-indexed.
///
/// Positions are ordered line first, then character, so
/// `Position::new(0, 40) < Position::new(1, 0)`. What a "character" counts
/// (UTF-16 code units, scalar values, bytes) is decided by the host; see
/// [`crate::PositionEncoding`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number, 0-based.
    pub line: usize,
    /// Offset within the line, 0-based.
    pub character: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    #[must_use]
    pub fn is_before(self, other: Position) -> bool {
        self < other
    }

    #[must_use]
    pub fn is_equal(self, other: Position) -> bool {
        self == other
    }

    #[must_use]
    pub fn is_after_or_equal(self, other: Position) -> bool {
        self >= other
    }

    /// Move this position by `line_delta` lines.
    ///
    /// When `line_delta` is zero, `character` is a delta added to the current
    /// character offset. Otherwise the position lands on a different line whose
    /// offsets have no relation to the old one, so `character` is taken as the
    /// absolute offset on the new line.
    ///
    /// Moving below line 0 or character 0 is a caller bug.
    #[must_use]
    pub fn translate(self, line_delta: isize, character: isize) -> Position {
        if line_delta == 0 {
            Position::new(self.line, offset(self.character, character))
        } else {
            Position::new(offset(self.line, line_delta), offset(0, character))
        }
    }

    /// Move this position forward by `extent`.
    #[must_use]
    pub fn advance(self, extent: Extent) -> Position {
        self.translate(extent.lines as isize, extent.characters as isize)
    }
}

fn offset(base: usize, delta: isize) -> usize {
    debug_assert!(
        base.checked_add_signed(delta).is_some(),
        "position moved out of range: {base} + {delta}"
    );
    base.saturating_add_signed(delta)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// The shape of a stretch of text, as seen from its start.
///
/// `lines` counts line breaks. When `lines` is zero, `characters` is the
/// length of the stretch; otherwise it is the length of its last line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub lines: usize,
    pub characters: usize,
}

impl Extent {
    #[must_use]
    pub const fn new(lines: usize, characters: usize) -> Self {
        Self { lines, characters }
    }
}

/// A half-open interval `[start, end)` of document positions.
///
/// `start == end` is a point location, not "no range".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// An empty range sitting at `at`.
    #[must_use]
    pub const fn point(at: Position) -> Self {
        Self { start: at, end: at }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`.
    #[must_use]
    pub const fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// True unless `end` lies before `start`.
    #[must_use]
    pub fn is_well_formed(self) -> bool {
        self.start <= self.end
    }

    /// True if `position` lies inside `[start, end)`.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    /// The distance from `start` to `end`.
    #[must_use]
    pub fn extent(self) -> Extent {
        debug_assert!(self.is_well_formed(), "inverted range {self}");
        let lines = self.end.line.saturating_sub(self.start.line);
        if lines == 0 {
            Extent::new(0, self.end.character.saturating_sub(self.start.character))
        } else {
            Extent::new(lines, self.end.character)
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
