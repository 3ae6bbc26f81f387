//! Layout and input constants for the terminal view.

/// Height of the status bar in lines.
///
/// Single line below the list showing the visible range and key hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the vertical scrollbar in columns.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Rows scrolled per mouse wheel notch.
pub const MOUSE_SCROLL_ROWS: i64 = 3;

/// Text shown in place of the list when there are no items.
pub const EMPTY_LIST_TEXT: &str = "(no items)";

/// Key hint pinned to the right end of the status bar.
pub const QUIT_HINT: &str = " q quit ";
