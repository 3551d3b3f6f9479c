//! Error types for edit descriptors that break the updater's contract.
//!
//! The update functions themselves never return these: feeding them a bad
//! edit is a caller bug and trips a debug assertion. Hosts that receive edits
//! from somewhere they don't trust can validate up front with
//! [`crate::Edit::try_new`] and [`crate::validate_batch`].

use thiserror::Error;

use crate::{Position, Range};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The replaced span ends before it starts
    #[error("edit range is inverted: start {start} is after end {end}")]
    InvertedRange { start: Position, end: Position },

    /// Two edits in one batch claim overlapping text
    #[error("edits in one batch overlap: {first} and {second}")]
    OverlappingEdits { first: Range, second: Range },
}

pub type EditResult<T> = Result<T, EditError>;
