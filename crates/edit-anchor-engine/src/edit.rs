use serde::{Deserialize, Serialize};

use crate::error::{EditError, EditResult};
use crate::{Extent, Position, Range};

/// One text replacement, expressed in the coordinates of the document
/// *before* it is applied.
///
/// A pure insertion has an empty `range`; a pure deletion has empty `text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edit {
    /// The span being replaced.
    pub range: Range,
    /// The replacement text.
    pub text: String,
}

impl Edit {
    pub fn new(range: Range, text: impl Into<String>) -> Self {
        debug_assert!(range.is_well_formed(), "inverted edit range {range}");
        Self {
            range,
            text: text.into(),
        }
    }

    /// Like [`Edit::new`], but reports an inverted range instead of asserting.
    pub fn try_new(range: Range, text: impl Into<String>) -> EditResult<Self> {
        if !range.is_well_formed() {
            return Err(EditError::InvertedRange {
                start: range.start,
                end: range.end,
            });
        }
        Ok(Self {
            range,
            text: text.into(),
        })
    }

    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self::new(Range::point(at), text)
    }

    pub fn delete(range: Range) -> Self {
        Self::new(range, String::new())
    }

    /// True when nothing is replaced, only inserted.
    pub fn is_insertion(&self) -> bool {
        self.range.is_empty()
    }

    pub fn delta(&self, encoding: PositionEncoding) -> EditDelta {
        EditDelta::new(self, encoding)
    }
}

/// The unit a [`Position::character`] counts in.
///
/// Only the replacement text has to be measured; positions arrive from the
/// host already in its own unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionEncoding {
    /// Bytes of UTF-8.
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-16 code units, as LSP and most editor hosts count.
    #[default]
    #[serde(rename = "utf-16")]
    Utf16,
    /// Unicode scalar values.
    #[serde(rename = "utf-32")]
    Utf32,
}

impl PositionEncoding {
    /// Length of `text` in this encoding's units.
    pub fn measure(self, text: &str) -> usize {
        match self {
            PositionEncoding::Utf8 => text.len(),
            PositionEncoding::Utf16 => text.encode_utf16().count(),
            PositionEncoding::Utf32 => text.chars().count(),
        }
    }
}

/// The shape of `text`: how many line breaks it holds and how long its last
/// line is. Line breaks are `\n`, `\r\n` and a lone `\r`, as LSP hosts count
/// them.
pub fn text_extent(text: &str, encoding: PositionEncoding) -> Extent {
    let is_break = |c: char| c == '\n' || c == '\r';
    match text.rfind(is_break) {
        None => Extent::new(0, encoding.measure(text)),
        Some(last_break) => {
            let breaks = text
                .char_indices()
                .filter(|&(i, c)| c == '\n' || (c == '\r' && !text[i + 1..].starts_with('\n')))
                .count();
            Extent::new(breaks, encoding.measure(&text[last_break + 1..]))
        }
    }
}

/// How one edit moves the positions at or after the end of its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDelta {
    replaced: Range,
    inserted: Extent,
    mapped_end: Position,
}

impl EditDelta {
    pub fn new(edit: &Edit, encoding: PositionEncoding) -> Self {
        let inserted = text_extent(&edit.text, encoding);
        Self {
            replaced: edit.range,
            inserted,
            mapped_end: edit.range.start.advance(inserted),
        }
    }

    /// The replaced span, in pre-edit coordinates.
    pub fn replaced(&self) -> Range {
        self.replaced
    }

    pub fn inserted_line_count(&self) -> usize {
        self.inserted.lines
    }

    pub fn inserted_last_line_length(&self) -> usize {
        self.inserted.characters
    }

    /// Where the replacement text ends, in post-edit coordinates.
    pub fn mapped_end(&self) -> Position {
        self.mapped_end
    }

    /// Translate a pre-edit position at or after the replaced span's end into
    /// post-edit coordinates.
    pub fn map(&self, position: Position) -> Position {
        let old_end = self.replaced.end;
        debug_assert!(
            position.is_after_or_equal(old_end),
            "position {position} lies before the end of edit {}",
            self.replaced
        );
        if position.line == old_end.line {
            Position::new(
                self.mapped_end.line,
                self.mapped_end.character + (position.character - old_end.character),
            )
        } else {
            Position::new(
                position.line - old_end.line + self.mapped_end.line,
                position.character,
            )
        }
    }
}
