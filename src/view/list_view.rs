//! Widget painting a virtualizer [`RenderTree`] into a terminal buffer.
//!
//! The buffer area plays the role of the scroll container: a row at layout
//! offset `r` lands on screen row `r - scroll_offset`. Item rows outside
//! `[scroll_offset, scroll_offset + area.height)` are clipped.

use super::constants::{EMPTY_LIST_TEXT, SCROLLBAR_WIDTH};
use super::styles::ListStyles;
use crate::view_state::{PositionedItem, RenderTree};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget};

/// Renders a windowed list with an optional scrollbar.
///
/// `tree` is `None` for an empty list. The virtualizer renders nothing in
/// that case; the `(no items)` placeholder line is terminal chrome drawn by
/// this widget, not part of any render tree.
pub struct VirtualListView<'a> {
    tree: Option<&'a RenderTree<Text<'a>>>,
    styles: &'a ListStyles,
    show_scrollbar: bool,
}

impl<'a> VirtualListView<'a> {
    /// Create a view over a rendered window.
    pub fn new(tree: Option<&'a RenderTree<Text<'a>>>, styles: &'a ListStyles) -> Self {
        Self {
            tree,
            styles,
            show_scrollbar: true,
        }
    }

    /// Draw the scrollbar when the content is taller than the area. Default: on.
    pub fn show_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self
    }
}

impl Widget for VirtualListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let Some(tree) = self.tree else {
            let placeholder = Line::styled(EMPTY_LIST_TEXT, self.styles.empty);
            buf.set_line(area.x, area.y, &placeholder, area.width);
            return;
        };

        buf.set_style(
            area,
            self.styles.container.patch(tree.container.attributes.style),
        );

        let viewport = u64::from(area.height);
        let scroll = tree.container.scroll_offset.get();
        let needs_scrollbar =
            self.show_scrollbar && tree.spacer.height > viewport && area.width > SCROLLBAR_WIDTH;

        let content_area = if needs_scrollbar {
            Rect {
                width: area.width - SCROLLBAR_WIDTH,
                ..area
            }
        } else {
            area
        };

        for item in &tree.items {
            paint_item(item, scroll, content_area, self.styles, buf);
        }

        if needs_scrollbar {
            let max_offset = tree.spacer.height.saturating_sub(viewport);
            let mut state = ScrollbarState::new(to_usize(max_offset).saturating_add(1))
                .position(to_usize(scroll.min(max_offset)))
                .viewport_content_length(usize::from(area.height));
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(self.styles.scrollbar)
                .render(area, buf, &mut state);
        }
    }
}

/// Paint the rows of `item` that intersect the viewport.
fn paint_item(
    item: &PositionedItem<Text<'_>>,
    scroll: u64,
    area: Rect,
    styles: &ListStyles,
    buf: &mut Buffer,
) {
    let top = item.top.get();
    let bottom = top.saturating_add(item.height.as_u64());
    let view_bottom = scroll.saturating_add(u64::from(area.height));
    let row_style = styles.item_style(item.index).patch(item.node.style);

    for row in top.max(scroll)..bottom.min(view_bottom) {
        // row - scroll < area.height, so it fits in u16
        let y = area.y + (row - scroll) as u16;
        buf.set_style(Rect::new(area.x, y, area.width, 1), row_style);
        if let Some(line) = item.node.lines.get(to_usize(row - top)) {
            buf.set_line(area.x, y, line, area.width);
        }
    }
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
