// Test helper functions - each integration test binary only uses part of them
#![allow(dead_code)]

use edit_anchor_engine::{Edit, Position, Range};
use xi_rope::Rope;

/// A document written in bracket notation: `[` and `]` mark the tracked
/// range, `(` and `)` the span an edit replaces.
#[derive(Debug)]
pub struct Marked {
    pub text: String,
    pub tracked: Range,
    pub edited: Range,
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse `he(l)lo\nw[or]ld` into its text and the two marked ranges.
///
/// Missing `(` `)` marks leave an empty edit span at the start of the text.
pub fn parse(marked: &str) -> Marked {
    let mut text = String::new();
    let mut at = Position::default();
    let mut tracked = (None, None);
    let mut edited = (None, None);

    for c in marked.chars() {
        match c {
            '[' => tracked.0 = Some(at),
            ']' => tracked.1 = Some(at),
            '(' => edited.0 = Some(at),
            ')' => edited.1 = Some(at),
            '\n' => {
                text.push(c);
                at = Position::new(at.line + 1, 0);
            }
            _ => {
                text.push(c);
                at.character += c.len_utf16();
            }
        }
    }

    let (Some(start), Some(end)) = tracked else {
        panic!("no tracked range in {marked:?}");
    };
    Marked {
        text,
        tracked: Range::new(start, end),
        edited: Range::new(
            edited.0.unwrap_or_default(),
            edited.1.or(edited.0).unwrap_or_default(),
        ),
    }
}

/// Write `range` back into `text` in bracket notation.
pub fn render(text: &str, range: Range) -> String {
    let mut out = String::new();
    let mut at = Position::default();
    let mark = |out: &mut String, at: Position| {
        if at == range.start {
            out.push('[');
        }
        if at == range.end {
            out.push(']');
        }
    };

    for c in text.chars() {
        mark(&mut out, at);
        out.push(c);
        if c == '\n' {
            at = Position::new(at.line + 1, 0);
        } else {
            at.character += c.len_utf16();
        }
    }
    mark(&mut out, at);
    out
}

/// Apply simultaneous edits to `text` the way a host editor would.
pub fn apply(text: &str, edits: &[Edit]) -> String {
    let mut rope = Rope::from(text);
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        b.range
            .start
            .cmp(&a.range.start)
            .then_with(|| b.range.end.cmp(&a.range.end))
    });
    for edit in sorted {
        let start = offset_of(&rope, edit.range.start);
        let end = offset_of(&rope, edit.range.end);
        rope.edit(start..end, edit.text.as_str());
    }
    rope.to_string()
}

/// Byte offset of an ASCII position.
pub fn offset_of(rope: &Rope, position: Position) -> usize {
    rope.offset_of_line(position.line) + position.character
}

/// The text a range covers in an ASCII document.
pub fn covered(text: &str, range: Range) -> String {
    let rope = Rope::from(text);
    let start = offset_of(&rope, range.start);
    let end = offset_of(&rope, range.end);
    text[start..end].to_string()
}

/// Every valid position in an ASCII document, in order.
pub fn positions(text: &str) -> Vec<Position> {
    text.split('\n')
        .enumerate()
        .flat_map(|(line, content)| (0..=content.len()).map(move |c| Position::new(line, c)))
        .collect()
}

/// Every well-formed range in an ASCII document, empty ones included.
pub fn ranges(text: &str) -> Vec<Range> {
    let all = positions(text);
    all.iter()
        .enumerate()
        .flat_map(|(i, &start)| all[i..].iter().map(move |&end| Range::new(start, end)))
        .collect()
}
