//! Semantic scroll position

use crate::model::{ItemHeight, ItemIndex, LayoutOffset};

/// Semantic scroll position within a virtualized list.
///
/// A sum type that preserves scroll intent across resizes and item
/// replacement:
/// - `Top`: Always shows from offset 0
/// - `Bottom`: Always shows the last rows in the viewport
/// - `AtOffset`: Specific absolute offset
/// - `AtIndex`: Keep a specific item at the top of the viewport
/// - `Fraction`: Proportional position (for scrollbar)
///
/// # Clamping Behavior
/// Resolution clamps to `[0, max(0, content_height - viewport_height)]`, so a
/// resolved position never leaves the viewport blank. `content_height` is the
/// spacer height, which is already bounded by `SAFE_MAX_HEIGHT`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScrollPosition {
    /// View from the very top.
    #[default]
    Top,

    /// View from the very bottom.
    Bottom,

    /// Specific offset from top.
    AtOffset(LayoutOffset),

    /// Keep a specific item at the top of the viewport.
    AtIndex {
        /// Index of the item.
        index: ItemIndex,
        /// Offset within the item (0 = top of item).
        offset_in_item: u64,
    },

    /// Fractional position (0.0 = top, 1.0 = bottom). Clamped to [0.0, 1.0].
    Fraction(f64),
}

impl ScrollPosition {
    /// Resolve to an absolute offset, clamped to the scrollable range.
    pub fn resolve(
        &self,
        content_height: u64,
        viewport_height: u64,
        item_height: ItemHeight,
    ) -> LayoutOffset {
        let max_offset = content_height.saturating_sub(viewport_height);
        let raw = match self {
            Self::Top => 0,
            Self::Bottom => max_offset,
            Self::AtOffset(offset) => offset.get(),
            Self::AtIndex {
                index,
                offset_in_item,
            } => index.top(item_height).get().saturating_add(*offset_in_item),
            Self::Fraction(fraction) => {
                let fraction = if fraction.is_nan() {
                    0.0
                } else {
                    fraction.clamp(0.0, 1.0)
                };
                (fraction * max_offset as f64).round() as u64
            }
        };
        LayoutOffset::new(raw.min(max_offset))
    }

    /// Create AtIndex position for the given item.
    pub fn at_index(index: ItemIndex) -> Self {
        Self::AtIndex {
            index,
            offset_in_item: 0,
        }
    }

    /// Create AtOffset position.
    pub fn at_offset(offset: u64) -> Self {
        Self::AtOffset(LayoutOffset::new(offset))
    }

    /// Position `delta` units away from `current`, saturating at 0.
    pub fn scrolled_by(current: LayoutOffset, delta: i64) -> Self {
        let target = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
        Self::AtOffset(target)
    }
}
