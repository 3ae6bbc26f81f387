//! Virtualizer container - mounts into a viewport host, tracks scroll and
//! resize, and renders only the items inside the visible window.

use super::render_tree::{ContainerNode, HostAttributes, PositionedItem, RenderTree, SpacerNode};
use super::tracker::{Phase, WindowTracker};
use super::visible_range::VisibleWindow;
use super::window::WindowCalculator;
use crate::host::{EventHub, EventKind, Subscription};
use crate::model::types::checked_dimension;
use crate::model::{
    container_height, content_height, DimensionError, ItemHeight, ItemIndex, ViewportState,
    DEFAULT_OVERSCAN,
};
use ratatui::style::Style;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Validated container configuration.
///
/// Built once through [`VirtualizerConfig::builder`]; every field has a
/// fixed type and a documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualizerConfig {
    item_height: ItemHeight,
    max_height: u32,
    overscan: usize,
    attributes: HostAttributes,
}

impl VirtualizerConfig {
    /// Start a builder. `item_height` and `max_height` are required.
    pub fn builder(item_height: i64, max_height: i64) -> VirtualizerConfigBuilder {
        VirtualizerConfigBuilder {
            item_height,
            max_height,
            overscan: DEFAULT_OVERSCAN,
            attributes: HostAttributes::default(),
        }
    }

    /// Fixed height of every item.
    pub fn item_height(&self) -> ItemHeight {
        self.item_height
    }

    /// Cap on the container's visible height.
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Rows rendered beyond each viewport edge.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Pass-through styling and identification.
    pub fn attributes(&self) -> &HostAttributes {
        &self.attributes
    }
}

/// Builder for [`VirtualizerConfig`].
///
/// Dimensions are accepted as signed integers so that zero and negative
/// values from config files reach validation instead of wrapping.
#[derive(Debug, Clone)]
pub struct VirtualizerConfigBuilder {
    item_height: i64,
    max_height: i64,
    overscan: usize,
    attributes: HostAttributes,
}

impl VirtualizerConfigBuilder {
    /// Rows rendered beyond each viewport edge. Default: 2.
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Class name forwarded to the container. Default: none.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.attributes.class_name = Some(class_name.into());
        self
    }

    /// Container style. Default: `Style::default()`.
    pub fn style(mut self, style: Style) -> Self {
        self.attributes.style = style;
        self
    }

    /// Test identifier forwarded to the container. Default: none.
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.attributes.test_id = Some(test_id.into());
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// [`DimensionError`] when `item_height` or `max_height` is not strictly
    /// positive or does not fit in `u32`.
    pub fn build(self) -> Result<VirtualizerConfig, DimensionError> {
        let item_height = ItemHeight::from_signed(self.item_height)?;
        let max_height = checked_dimension("max_height", self.max_height)?;
        Ok(VirtualizerConfig {
            item_height,
            max_height,
            overscan: self.overscan,
            attributes: self.attributes,
        })
    }
}

/// An unmounted virtualizer: items, configuration and the item renderer.
///
/// `F` is the caller's `render_item` callback, `Fn(&T, ItemIndex) -> N`.
/// It must not have side effects on the virtualizer.
pub struct Virtualizer<T, F> {
    items: Rc<[T]>,
    config: VirtualizerConfig,
    render_item: F,
}

impl<T, F> Virtualizer<T, F> {
    /// Create an unmounted virtualizer.
    pub fn new(items: impl Into<Rc<[T]>>, config: VirtualizerConfig, render_item: F) -> Self {
        Self {
            items: items.into(),
            config,
            render_item,
        }
    }

    /// Items to virtualize.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Configuration.
    pub fn config(&self) -> &VirtualizerConfig {
        &self.config
    }

    /// Mount into `host`.
    ///
    /// Reads the host's current viewport, computes the initial window and
    /// subscribes to scroll and resize events. The subscriptions live exactly
    /// as long as the returned value.
    pub fn mount(self, host: &EventHub) -> MountedVirtualizer<T, F> {
        let viewport = host.viewport();
        let tracker = Rc::new(RefCell::new(WindowTracker::new(
            viewport,
            self.config.item_height,
            self.items.len(),
            WindowCalculator::new(self.config.overscan),
        )));

        let on_scroll = Rc::clone(&tracker);
        let scroll = host.subscribe(EventKind::Scroll, move |event| {
            on_scroll.borrow_mut().handle_event(event);
        });
        let on_resize = Rc::clone(&tracker);
        let resize = host.subscribe(EventKind::Resize, move |event| {
            on_resize.borrow_mut().handle_event(event);
        });

        debug!(
            items = self.items.len(),
            item_height = self.config.item_height.get(),
            max_height = self.config.max_height,
            scroll = viewport.scroll_offset.get(),
            viewport = viewport.viewport_height,
            window = ?tracker.borrow().window(),
            "virtualizer mounted"
        );

        MountedVirtualizer {
            items: self.items,
            config: self.config,
            render_item: self.render_item,
            tracker,
            subscriptions: [scroll, resize],
        }
    }
}

/// A virtualizer attached to a host.
///
/// Dropping it (or calling [`MountedVirtualizer::unmount`]) detaches its
/// scroll and resize listeners.
pub struct MountedVirtualizer<T, F> {
    items: Rc<[T]>,
    config: VirtualizerConfig,
    render_item: F,
    tracker: Rc<RefCell<WindowTracker>>,
    subscriptions: [Subscription; 2],
}

impl<T, F> MountedVirtualizer<T, F> {
    /// Detach from the host, keeping items, config and renderer for a
    /// later remount.
    pub fn unmount(self) -> Virtualizer<T, F> {
        let Self {
            items,
            config,
            render_item,
            subscriptions,
            ..
        } = self;
        drop(subscriptions);
        debug!(items = items.len(), "virtualizer unmounted");
        Virtualizer {
            items,
            config,
            render_item,
        }
    }

    /// Replace the item list.
    ///
    /// A new list recomputes the window; passing the list that is already
    /// mounted (same `Rc`) does nothing. Returns whether a recompute ran.
    pub fn set_items(&mut self, items: impl Into<Rc<[T]>>) -> bool {
        let items = items.into();
        if Rc::ptr_eq(&self.items, &items) {
            return false;
        }
        debug!(
            old = self.items.len(),
            new = items.len(),
            "items replaced"
        );
        self.items = items;
        self.tracker.borrow_mut().set_item_count(self.items.len());
        true
    }

    /// Change the fixed item height and recompute.
    pub fn set_item_height(&mut self, item_height: ItemHeight) {
        self.config.item_height = item_height;
        self.tracker.borrow_mut().set_item_height(item_height);
    }

    /// Shared handle to the mounted item list.
    pub fn items(&self) -> &Rc<[T]> {
        &self.items
    }

    /// Configuration.
    pub fn config(&self) -> &VirtualizerConfig {
        &self.config
    }

    /// Current visible window, `None` for an empty list.
    pub fn window(&self) -> Option<VisibleWindow> {
        self.tracker.borrow().window()
    }

    /// Viewport as last reported by the host.
    pub fn viewport(&self) -> ViewportState {
        self.tracker.borrow().viewport()
    }

    /// Recompute phase. Always `Idle` between calls.
    pub fn phase(&self) -> Phase {
        self.tracker.borrow().phase()
    }

    /// Number of window recomputes since mount, the initial one included.
    pub fn recompute_count(&self) -> u64 {
        self.tracker.borrow().recompute_count()
    }

    /// Spacer height: content height clamped to `SAFE_MAX_HEIGHT`.
    pub fn content_height(&self) -> u64 {
        content_height(self.items.len(), self.config.item_height)
    }

    /// Container height: content height capped at `max_height`.
    pub fn container_height(&self) -> u64 {
        container_height(self.items.len(), self.config.item_height, self.config.max_height)
    }

    fn shell(&self) -> (ContainerNode, SpacerNode) {
        let container = ContainerNode {
            height: self.container_height(),
            scroll_offset: self.viewport().scroll_offset,
            attributes: self.config.attributes.clone(),
        };
        let spacer = SpacerNode {
            height: self.content_height(),
        };
        (container, spacer)
    }

    fn visible(&self) -> Option<(VisibleWindow, &[T])> {
        let window = self.window()?;
        let slice = &self.items[window.start.get()..=window.end.get()];
        Some((window, slice))
    }

    /// Render the current window.
    ///
    /// Returns `None` for an empty list: no container, no spacer. Otherwise
    /// calls `render_item` once per visible item. A panic in the callback
    /// propagates to the caller.
    pub fn render<N>(&self) -> Option<RenderTree<N>>
    where
        F: Fn(&T, ItemIndex) -> N,
    {
        let (window, slice) = self.visible()?;
        let height = self.config.item_height;
        let items = window
            .indices()
            .zip(slice)
            .map(|(index, item)| PositionedItem {
                index,
                top: index.top(height),
                height,
                node: (self.render_item)(item, index),
            })
            .collect();

        let (container, spacer) = self.shell();
        Some(RenderTree {
            container,
            spacer,
            items,
        })
    }

    /// Render the current window with a fallible `render_item`.
    ///
    /// # Errors
    /// The first error returned by the callback, unchanged. Items after the
    /// failing one are not rendered.
    pub fn try_render<M, E>(&self) -> Result<Option<RenderTree<M>>, E>
    where
        F: Fn(&T, ItemIndex) -> Result<M, E>,
    {
        let Some((window, slice)) = self.visible() else {
            return Ok(None);
        };
        let height = self.config.item_height;
        let mut items = Vec::with_capacity(window.len());
        for (index, item) in window.indices().zip(slice) {
            items.push(PositionedItem {
                index,
                top: index.top(height),
                height,
                node: (self.render_item)(item, index)?,
            });
        }

        let (container, spacer) = self.shell();
        Ok(Some(RenderTree {
            container,
            spacer,
            items,
        }))
    }
}

#[cfg(test)]
#[path = "virtualizer_tests.rs"]
mod tests;
