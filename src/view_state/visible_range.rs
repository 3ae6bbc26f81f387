//! Visible window calculation result

use crate::model::ItemIndex;

/// Contiguous range of items materialized in the render tree.
///
/// Both ends are inclusive. An empty list has no window at all; callers hold
/// an `Option<VisibleWindow>` and `None` stands for "render nothing".
///
/// # Invariants
/// - `start <= end`
/// - `end < item_count` for the list the window was computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// Index of the first rendered item (inclusive).
    pub start: ItemIndex,
    /// Index of the last rendered item (inclusive).
    pub end: ItemIndex,
}

impl VisibleWindow {
    /// Create new visible window.
    ///
    /// # Panics
    /// In debug builds, panics if start > end.
    pub fn new(start: ItemIndex, end: ItemIndex) -> Self {
        debug_assert!(
            start <= end,
            "window start {} is after end {}",
            start.get(),
            end.get()
        );
        Self { start, end }
    }

    /// Number of rendered items. Never zero.
    pub fn len(&self) -> usize {
        self.end.get() - self.start.get() + 1
    }

    /// Always false: an inclusive window holds at least one item.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First rendered index.
    pub fn first(&self) -> ItemIndex {
        self.start
    }

    /// Last rendered index.
    pub fn last(&self) -> ItemIndex {
        self.end
    }

    /// Iterate over rendered item indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = ItemIndex> {
        (self.start.get()..=self.end.get()).map(ItemIndex::new)
    }

    /// Check if a specific item index is rendered.
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.start <= index && index <= self.end
    }
}
