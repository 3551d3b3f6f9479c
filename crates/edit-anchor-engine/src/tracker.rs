use serde::{Deserialize, Serialize};

use crate::update::{
    RangeUpdate, UpdateOptions, update_fixed_range, update_fixed_range_multiple_changes,
    update_range, update_range_multiple_changes,
};
use crate::{Edit, Range};

/// Which updater a [`TrackedRange`] runs edits through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingPolicy {
    /// Grow and shrink with the tracked text.
    #[default]
    Elastic,
    /// Keep the original size, follow the start.
    Fixed,
}

/// One range kept up to date across a stream of edit events.
///
/// Created when the caller starts tracking a selection or region, fed every
/// document change, dropped when the caller stops caring. Once an edit
/// consumes the range it stays collapsed and reports `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedRange {
    range: Range,
    policy: TrackingPolicy,
    options: UpdateOptions,
    collapsed: bool,
}

impl TrackedRange {
    pub fn new(range: Range, policy: TrackingPolicy, options: UpdateOptions) -> Self {
        debug_assert!(range.is_well_formed(), "inverted tracked range {range}");
        Self {
            range,
            policy,
            options,
            collapsed: false,
        }
    }

    pub fn elastic(range: Range) -> Self {
        Self::new(range, TrackingPolicy::Elastic, UpdateOptions::default())
    }

    pub fn fixed(range: Range) -> Self {
        Self::new(range, TrackingPolicy::Fixed, UpdateOptions::default())
    }

    /// The current range, or `None` once it has been consumed.
    pub fn range(&self) -> Option<Range> {
        (!self.collapsed).then_some(self.range)
    }

    /// Where the range is, or where it collapsed to.
    pub fn last_known(&self) -> Range {
        self.range
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn policy(&self) -> TrackingPolicy {
        self.policy
    }

    pub fn options(&self) -> UpdateOptions {
        self.options
    }

    /// Run a single edit through the range.
    pub fn apply(&mut self, edit: &Edit) -> Option<Range> {
        if self.collapsed {
            return None;
        }
        match self.policy {
            TrackingPolicy::Elastic => {
                let update = update_range(self.range, edit, self.options);
                self.settle(update);
            }
            TrackingPolicy::Fixed => {
                self.range = update_fixed_range(self.range, edit, self.options);
            }
        }
        self.range()
    }

    /// Run a batch of simultaneous, non-overlapping edits through the range.
    pub fn apply_batch(&mut self, edits: &[Edit]) -> Option<Range> {
        if self.collapsed {
            return None;
        }
        match self.policy {
            TrackingPolicy::Elastic => {
                let update = update_range_multiple_changes(self.range, edits, self.options);
                self.settle(update);
            }
            TrackingPolicy::Fixed => {
                self.range = update_fixed_range_multiple_changes(self.range, edits, self.options);
            }
        }
        self.range()
    }

    fn settle(&mut self, update: RangeUpdate) {
        self.range = update.range();
        if update.is_collapsed() {
            log::debug!("tracked range collapsed at {}", self.range.start);
            self.collapsed = true;
        }
    }
}
