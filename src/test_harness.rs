//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with methods for simulating user interactions.

use crate::view::{demo_items, ColorConfig, ListStyles, TuiApp, TuiError};
use crate::view_state::VirtualizerConfig;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Demo list of `item_count` items in an 80x24 terminal, colors off.
    pub fn new(item_count: usize, item_height: i64, max_height: i64) -> Result<Self, TuiError> {
        Self::with_size(item_count, item_height, max_height, 80, 24)
    }

    /// Demo list in a terminal of the given size.
    ///
    /// # Panics
    /// Panics if the dimensions are rejected; harness callers pass valid ones.
    pub fn with_size(
        item_count: usize,
        item_height: i64,
        max_height: i64,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let config = VirtualizerConfig::builder(item_height, max_height)
            .build()
            .expect("harness dimensions must be valid");
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let styles = ListStyles::with_color_config(ColorConfig::disabled());
        let app = TuiApp::with_terminal(terminal, demo_items(item_count), config, styles)?;

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_event(Event::Key(KeyEvent::new(key, mods)));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping if one quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Turn the mouse wheel one notch.
    pub fn scroll_wheel(&mut self, down: bool) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.app.handle_event(Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Resize the test terminal and deliver the resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_event(Event::Resize(width, height));
    }

    /// The app under test.
    pub fn app(&self) -> &TuiApp<TestBackend> {
        &self.app
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");

        let buffer = self.app.terminal().backend().buffer();
        buffer_to_string(buffer)
    }
}
