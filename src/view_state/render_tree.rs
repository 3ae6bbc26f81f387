//! Render tree emitted by a mounted virtualizer.
//!
//! The tree mirrors the three layers of a virtualized scroll region:
//!
//! ```text
//! ContainerNode   height = min(n * h, max_height), scrolled to scroll_offset
//! └─ SpacerNode   height = min(n * h, SAFE_MAX_HEIGHT)
//!    ├─ PositionedItem { top = start * h, height = h }
//!    ├─ ...
//!    └─ PositionedItem { top = end * h, height = h }
//! ```
//!
//! Items outside the visible window are absent from the tree.

use crate::model::{ItemHeight, ItemIndex, LayoutOffset};
use ratatui::style::Style;

/// Pass-through styling and identification hooks.
///
/// None of these affect which items are rendered or where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAttributes {
    /// Free-form class name, forwarded to the container.
    pub class_name: Option<String>,
    /// Style applied to the container area.
    pub style: Style,
    /// Identifier for tests and tooling.
    pub test_id: Option<String>,
}

/// Outer scroll container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    /// Visible height of the container.
    pub height: u64,
    /// Current scroll offset of the container.
    pub scroll_offset: LayoutOffset,
    /// Pass-through attributes.
    pub attributes: HostAttributes,
}

/// Inner element sized to the full (clamped) content height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacerNode {
    /// Height of the scrollable content.
    pub height: u64,
}

/// One rendered item, absolutely positioned inside the spacer.
///
/// Items always span the full container width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedItem<N> {
    /// Index of the item in the caller's list.
    pub index: ItemIndex,
    /// Offset of the item's top edge from the top of the spacer.
    pub top: LayoutOffset,
    /// Height of the item.
    pub height: ItemHeight,
    /// Node produced by the caller's `render_item` callback.
    pub node: N,
}

/// Complete output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree<N> {
    /// Scroll container.
    pub container: ContainerNode,
    /// Full-height spacer.
    pub spacer: SpacerNode,
    /// Rendered items in ascending index order.
    pub items: Vec<PositionedItem<N>>,
}

impl<N> RenderTree<N> {
    /// Number of item nodes in the tree.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Rendered indices in order.
    pub fn indices(&self) -> impl Iterator<Item = ItemIndex> + '_ {
        self.items.iter().map(|item| item.index)
    }

    /// Find the rendered item with `index`, if present.
    pub fn item(&self, index: ItemIndex) -> Option<&PositionedItem<N>> {
        self.items
            .binary_search_by_key(&index, |item| item.index)
            .ok()
            .map(|pos| &self.items[pos])
    }

    /// Map every node, keeping positions.
    pub fn map_nodes<M>(self, mut f: impl FnMut(N) -> M) -> RenderTree<M> {
        RenderTree {
            container: self.container,
            spacer: self.spacer,
            items: self
                .items
                .into_iter()
                .map(|item| PositionedItem {
                    index: item.index,
                    top: item.top,
                    height: item.height,
                    node: f(item.node),
                })
                .collect(),
        }
    }
}
