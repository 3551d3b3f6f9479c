// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use edit_anchor_engine::{Edit, Position, Range};

/// One single-character insertion per line, like a multi-cursor keystroke
/// over `lines` lines.
#[allow(dead_code)]
pub fn generate_cursor_edits(lines: usize, column: usize) -> Vec<Edit> {
    (0..lines)
        .map(|line| Edit::insert(Position::new(line, column), "x"))
        .collect()
}

/// A mix of insertions, deletions and multi-line replacements, two per line,
/// never overlapping.
#[allow(dead_code)]
pub fn generate_mixed_edits(lines: usize) -> Vec<Edit> {
    let mut edits = Vec::with_capacity(lines * 2);
    for line in 0..lines {
        match line % 3 {
            0 => edits.push(Edit::insert(Position::new(line, 0), "// ")),
            1 => edits.push(Edit::delete(Range::from_coords(line, 2, line, 6))),
            _ => edits.push(Edit::new(
                Range::from_coords(line, 4, line, 8),
                "first\nsecond",
            )),
        }
        edits.push(Edit::insert(Position::new(line, 20), "tail"));
    }
    edits
}

/// A range covering all but the outermost lines of a `lines`-line document.
#[allow(dead_code)]
pub fn spanning_range(lines: usize) -> Range {
    Range::from_coords(1, 10, lines.saturating_sub(2), 10)
}
