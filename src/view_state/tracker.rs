//! Window tracker - the container's two-state recompute machine.
//!
//! ```text
//!        scroll / resize / items / item height
//!   Idle ─────────────────────────────────────▶ Recomputing
//!    ▲                                              │
//!    └──────────────── window stored ───────────────┘
//! ```
//!
//! The round trip completes inside the call that triggered it; there is no
//! deferred or debounced recompute.

use super::visible_range::VisibleWindow;
use super::window::WindowCalculator;
use crate::host::ViewportEvent;
use crate::model::{ItemHeight, ViewportState};
use tracing::trace;

/// Recompute state of a mounted container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Mounted, nothing pending.
    #[default]
    Idle,
    /// An input changed and the window is being recalculated.
    Recomputing,
}

/// Tracks viewport, item geometry and the derived visible window.
#[derive(Debug, Clone)]
pub struct WindowTracker {
    calculator: WindowCalculator,
    item_height: ItemHeight,
    item_count: usize,
    viewport: ViewportState,
    window: Option<VisibleWindow>,
    phase: Phase,
    recomputes: u64,
}

impl WindowTracker {
    /// Create a tracker and compute the initial window.
    pub fn new(
        viewport: ViewportState,
        item_height: ItemHeight,
        item_count: usize,
        calculator: WindowCalculator,
    ) -> Self {
        let mut tracker = Self {
            calculator,
            item_height,
            item_count,
            viewport,
            window: None,
            phase: Phase::Idle,
            recomputes: 0,
        };
        tracker.recompute();
        tracker
    }

    /// Apply a host event and recompute.
    pub fn handle_event(&mut self, event: &ViewportEvent) {
        match *event {
            ViewportEvent::Scroll { offset } => self.viewport.scroll_offset = offset,
            ViewportEvent::Resize { height } => self.viewport.viewport_height = height,
        }
        self.recompute();
    }

    /// The caller replaced its item list.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.recompute();
    }

    /// The caller changed the fixed item height.
    pub fn set_item_height(&mut self, item_height: ItemHeight) {
        self.item_height = item_height;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.phase = Phase::Recomputing;
        self.window = self
            .calculator
            .compute(self.viewport, self.item_height, self.item_count);
        self.recomputes += 1;
        self.phase = Phase::Idle;
        trace!(
            scroll = self.viewport.scroll_offset.get(),
            viewport = self.viewport.viewport_height,
            items = self.item_count,
            window = ?self.window,
            "window recomputed"
        );
    }

    /// Current visible window, `None` for an empty list.
    pub fn window(&self) -> Option<VisibleWindow> {
        self.window
    }

    /// Last viewport seen.
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Current phase. Always `Idle` between calls.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of recomputes since construction, the initial one included.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Item count the window was computed against.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Item height the window was computed against.
    pub fn item_height(&self) -> ItemHeight {
        self.item_height
    }
}
