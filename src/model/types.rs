//! Core layout newtypes shared by the window calculator, the host and the
//! container.
//!
//! All dimensions are integer layout units. The terminal adapter maps one
//! unit to one row.

use super::error::DimensionError;

/// Upper bound on the synthetic content height.
///
/// Lists whose `item_count * item_height` exceeds this are clamped; rows past
/// the sentinel cannot be reached by scrolling.
pub const SAFE_MAX_HEIGHT: u64 = 999_999;

/// Rows rendered beyond each edge of the visible viewport.
pub const DEFAULT_OVERSCAN: usize = 2;

/// Fixed height of a single item in layout units. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemHeight(u32);

impl ItemHeight {
    /// Smallest valid item height.
    pub const ONE: Self = Self(1);

    /// Smart constructor that rejects a zero height.
    pub fn new(height: u32) -> Result<Self, DimensionError> {
        if height == 0 {
            Err(DimensionError::NonPositive {
                field: "item_height",
                value: 0,
            })
        } else {
            Ok(Self(height))
        }
    }

    /// Validate a signed dimension (config files and builders accept `i64`).
    pub fn from_signed(height: i64) -> Result<Self, DimensionError> {
        let raw = checked_dimension("item_height", height)?;
        Self::new(raw)
    }

    /// Get the raw u32 value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Same value widened to the offset domain.
    pub fn as_u64(&self) -> u64 {
        u64::from(self.0)
    }
}

impl Default for ItemHeight {
    fn default() -> Self {
        Self::ONE
    }
}

/// Validate that a signed dimension is strictly positive and fits in `u32`.
pub(crate) fn checked_dimension(field: &'static str, value: i64) -> Result<u32, DimensionError> {
    if value <= 0 {
        return Err(DimensionError::NonPositive { field, value });
    }
    u32::try_from(value).map_err(|_| DimensionError::TooLarge { field, value })
}

/// Absolute offset from the top of the content, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LayoutOffset(u64);

impl LayoutOffset {
    /// Offset zero.
    pub const ZERO: Self = Self(0);

    /// Create a new LayoutOffset from a raw value.
    pub fn new(offset: u64) -> Self {
        Self(offset)
    }

    /// Get the raw u64 value.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Add an amount to this offset, saturating at u64::MAX.
    pub fn saturating_add(&self, amount: u64) -> Self {
        Self(self.0.saturating_add(amount))
    }

    /// Subtract an amount from this offset, saturating at 0.
    pub fn saturating_sub(&self, amount: u64) -> Self {
        Self(self.0.saturating_sub(amount))
    }
}

/// Item index within the list. 0-indexed internally, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the 1-based index for display purposes.
    pub fn display(&self) -> usize {
        self.0 + 1
    }

    /// Absolute top of this item when every item is `height` tall.
    pub fn top(&self, height: ItemHeight) -> LayoutOffset {
        LayoutOffset((self.0 as u64).saturating_mul(height.as_u64()))
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Scroll position and size of the scrollable viewport.
///
/// Owned by the host; the virtualizer only ever sees copies delivered on
/// mount and through scroll/resize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    /// Distance scrolled from the top of the content.
    pub scroll_offset: LayoutOffset,
    /// Visible height of the viewport.
    pub viewport_height: u32,
}

impl ViewportState {
    /// Create new viewport state.
    pub fn new(scroll_offset: u64, viewport_height: u32) -> Self {
        Self {
            scroll_offset: LayoutOffset::new(scroll_offset),
            viewport_height,
        }
    }

    /// Offset one past the last visible unit.
    pub fn bottom(&self) -> u64 {
        self.scroll_offset
            .get()
            .saturating_add(u64::from(self.viewport_height))
    }
}

/// Unclamped `item_count * item_height`, saturating at u64::MAX.
pub fn raw_content_height(item_count: usize, item_height: ItemHeight) -> u64 {
    (item_count as u64).saturating_mul(item_height.as_u64())
}

/// Height of the spacer: total content height clamped to [`SAFE_MAX_HEIGHT`].
pub fn content_height(item_count: usize, item_height: ItemHeight) -> u64 {
    raw_content_height(item_count, item_height).min(SAFE_MAX_HEIGHT)
}

/// Height of the scroll container: total content height capped at `max_height`.
pub fn container_height(item_count: usize, item_height: ItemHeight, max_height: u32) -> u64 {
    raw_content_height(item_count, item_height).min(u64::from(max_height))
}
