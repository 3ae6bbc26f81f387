//! List styling configuration.
//!
//! Styles are built once from a [`ColorConfig`] and passed to the widget and
//! the item renderer explicitly.

use crate::model::ItemIndex;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles for the list, its scrollbar and the status bar.
///
/// Item rows alternate between two styles so row boundaries stay visible
/// when items are taller than one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStyles {
    /// Container background, applied before any item is drawn.
    pub container: Style,
    /// Rows of even-indexed items.
    pub item_even: Style,
    /// Rows of odd-indexed items.
    pub item_odd: Style,
    /// Index column at the start of each item's first line.
    pub index: Style,
    /// Scrollbar thumb.
    pub scrollbar: Style,
    /// Status bar line.
    pub status_bar: Style,
    /// Placeholder shown for an empty list.
    pub empty: Style,
}

impl ListStyles {
    /// Create styles with the specified color configuration.
    ///
    /// If colors are disabled, only text modifiers remain.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                container: Style::default(),
                item_even: Style::default(),
                item_odd: Style::default().bg(Color::Indexed(236)),
                index: Style::default().fg(Color::Cyan),
                scrollbar: Style::default().fg(Color::Gray),
                status_bar: Style::default().fg(Color::Black).bg(Color::Cyan),
                empty: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                container: Style::default(),
                item_even: Style::default(),
                item_odd: Style::default(),
                index: Style::default().add_modifier(Modifier::BOLD),
                scrollbar: Style::default(),
                status_bar: Style::default().add_modifier(Modifier::REVERSED),
                empty: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }

    /// Row style for the item at `index`.
    pub fn item_style(&self, index: ItemIndex) -> Style {
        if index.get() % 2 == 0 {
            self.item_even
        } else {
            self.item_odd
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
