/*!
 * # edit-anchor-engine
 *
 * Keeps a tracked range pointing at the same logical text while the document
 * around it is edited, without looking at the document.
 *
 * A host editor reports each change as an [`Edit`]: the span replaced and the
 * replacement text, both in the coordinates of the document before the change.
 * From that alone the engine works out where a highlighted selection, a pending
 * edit region or a streamed patch now lies, or that the edit swallowed it.
 *
 * ## Module Structure
 *
 * - **`position`**: `Position`, `Range` and `Extent` value types
 * - **`edit`**: `Edit` descriptors and the `EditDelta` they induce on later positions
 * - **`update`**: the elastic, fixed-extent and batch updaters
 * - **`tracker`**: `TrackedRange`, a caller-owned range that applies edit events
 * - **`error`**: errors for callers validating untrusted edits
 *
 * Every updater is a pure function over values; nothing is retained between
 * calls.
 *
 * ## Usage
 *
 * ```rust
 * use edit_anchor_engine::*;
 *
 * // "hello, world" with "world" tracked
 * let tracked = Range::from_coords(0, 7, 0, 12);
 *
 * // the user deletes "hello, "
 * let edit = Edit::delete(Range::from_coords(0, 0, 0, 7));
 * let update = update_range(tracked, &edit, UpdateOptions::default());
 * assert_eq!(update.live(), Some(Range::from_coords(0, 0, 0, 5)));
 *
 * // several cursors type at once
 * let edits = [
 *     Edit::insert(Position::new(0, 0), "> "),
 *     Edit::insert(Position::new(0, 5), "!"),
 * ];
 * let update = update_range_multiple_changes(Range::from_coords(0, 0, 0, 5), &edits, UpdateOptions::default());
 * assert_eq!(update.live(), Some(Range::from_coords(0, 2, 0, 7)));
 * ```
 */

pub mod edit;
pub mod error;
pub mod position;
pub mod tracker;
pub mod update;

// Re-export key types for easier usage
pub use edit::{Edit, EditDelta, PositionEncoding, text_extent};
pub use error::{EditError, EditResult};
pub use position::{Extent, Position, Range};
pub use tracker::{TrackedRange, TrackingPolicy};
pub use update::{
    Overlap, RangeUpdate, UpdateOptions, update_fixed_range, update_fixed_range_multiple_changes,
    update_range, update_range_multiple_changes, validate_batch,
};
