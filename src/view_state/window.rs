//! Window calculation - maps a viewport onto the inclusive range of items to
//! render.
//!
//! For fixed-height rows the mapping is plain arithmetic:
//!
//! ```text
//! start = max(0, floor(scroll / h) - overscan)
//! end   = min(n - 1, ceil((scroll + viewport) / h) + overscan)
//! ```
//!
//! Both ends are clamped into `[0, n - 1]`, so a scroll offset past the end of
//! the content (elastic overscroll) still yields a valid window.

use super::visible_range::VisibleWindow;
use crate::model::{ItemHeight, ItemIndex, ViewportState, DEFAULT_OVERSCAN};

/// Compute the inclusive window of items covering `viewport` plus `overscan`
/// rows on each side.
///
/// Returns `None` when `item_count == 0`: an empty list renders nothing.
///
/// # Examples
///
/// ```
/// use vlist::model::{ItemHeight, ItemIndex, ViewportState};
/// use vlist::view_state::window::compute_window;
///
/// let h = ItemHeight::new(80).unwrap();
/// let w = compute_window(ViewportState::new(0, 400), h, 10_000, 2).unwrap();
/// assert_eq!((w.start, w.end), (ItemIndex::new(0), ItemIndex::new(7)));
///
/// let w = compute_window(ViewportState::new(4000, 400), h, 10_000, 2).unwrap();
/// assert_eq!(w.start, ItemIndex::new(48));
/// ```
pub fn compute_window(
    viewport: ViewportState,
    item_height: ItemHeight,
    item_count: usize,
    overscan: usize,
) -> Option<VisibleWindow> {
    if item_count == 0 {
        return None;
    }

    let h = item_height.as_u64();
    let last = item_count - 1;

    let first_visible = to_index(viewport.scroll_offset.get() / h);
    let start = first_visible.saturating_sub(overscan).min(last);

    let past_visible = to_index(viewport.bottom().div_ceil(h));
    let end = past_visible.saturating_add(overscan).min(last);

    Some(VisibleWindow::new(ItemIndex::new(start), ItemIndex::new(end)))
}

/// Row numbers beyond `usize` can only come from absurd offsets; they are
/// clamped by the caller anyway.
fn to_index(row: u64) -> usize {
    usize::try_from(row).unwrap_or(usize::MAX)
}

/// Window calculator carrying a configured overscan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCalculator {
    overscan: usize,
}

impl WindowCalculator {
    /// Create a calculator with the given overscan.
    pub fn new(overscan: usize) -> Self {
        Self { overscan }
    }

    /// Configured overscan in rows.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// See [`compute_window`].
    pub fn compute(
        &self,
        viewport: ViewportState,
        item_height: ItemHeight,
        item_count: usize,
    ) -> Option<VisibleWindow> {
        compute_window(viewport, item_height, item_count, self.overscan)
    }
}

impl Default for WindowCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_OVERSCAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(height: u32) -> ItemHeight {
        ItemHeight::new(height).unwrap()
    }

    fn range(w: Option<VisibleWindow>) -> Option<(usize, usize)> {
        w.map(|w| (w.start.get(), w.end.get()))
    }

    #[test]
    fn empty_list_has_no_window() {
        let w = compute_window(ViewportState::new(0, 400), h(80), 0, 2);
        assert_eq!(w, None);
    }

    #[test]
    fn top_of_list_clamps_start_to_zero() {
        // 5 rows fit, ceil(400/80) + 2 = 7
        let w = compute_window(ViewportState::new(0, 400), h(80), 10_000, 2);
        assert_eq!(range(w), Some((0, 7)));
    }

    #[test]
    fn scrolled_window_starts_overscan_rows_early() {
        // floor(4000/80) - 2 = 48, ceil(4400/80) + 2 = 57
        let w = compute_window(ViewportState::new(4000, 400), h(80), 10_000, 2);
        assert_eq!(range(w), Some((48, 57)));
    }

    #[test]
    fn unaligned_offset_rounds_start_down_and_end_up() {
        // floor(4001/80) - 2 = 48, ceil(4401/80) + 2 = 58
        let w = compute_window(ViewportState::new(4001, 400), h(80), 10_000, 2);
        assert_eq!(range(w), Some((48, 58)));
    }

    #[test]
    fn end_clamps_to_last_item() {
        let w = compute_window(ViewportState::new(0, 400), h(80), 3, 2);
        assert_eq!(range(w), Some((0, 2)));
    }

    #[test]
    fn single_item_list_yields_single_item_window() {
        let w = compute_window(ViewportState::new(0, 400), h(80), 1, 2);
        assert_eq!(range(w), Some((0, 0)));
    }

    #[test]
    fn overscroll_past_end_clamps_both_ends() {
        // Content is 100 * 10 = 1000 units; scroll far beyond it
        let w = compute_window(ViewportState::new(50_000, 50), h(10), 100, 2);
        assert_eq!(range(w), Some((99, 99)));
    }

    #[test]
    fn zero_overscan_renders_only_intersecting_rows_plus_boundary() {
        // ceil(100/10) = 10 is the row starting exactly at the viewport bottom
        let w = compute_window(ViewportState::new(0, 100), h(10), 1_000, 0);
        assert_eq!(range(w), Some((0, 10)));
    }

    #[test]
    fn huge_offsets_do_not_overflow() {
        let w = compute_window(ViewportState::new(u64::MAX, u32::MAX), h(1), 10, 2);
        assert_eq!(range(w), Some((9, 9)));
    }

    #[test]
    fn same_inputs_same_output() {
        let viewport = ViewportState::new(1234, 321);
        let a = compute_window(viewport, h(7), 5_000, 2);
        let b = compute_window(viewport, h(7), 5_000, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn calculator_default_uses_default_overscan() {
        let calc = WindowCalculator::default();
        assert_eq!(calc.overscan(), DEFAULT_OVERSCAN);
        assert_eq!(
            calc.compute(ViewportState::new(4000, 400), h(80), 10_000),
            compute_window(ViewportState::new(4000, 400), h(80), 10_000, 2)
        );
    }
}
