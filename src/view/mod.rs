//! TUI rendering and terminal management (impure shell)
//!
//! The terminal window is the viewport host: key presses, mouse wheel and
//! resizes become [`EventHub`] events, and each frame paints whatever the
//! mounted virtualizer renders.

pub mod constants;
mod list_view;
mod styles;

pub use list_view::VirtualListView;
pub use styles::{ColorConfig, ListStyles};

use crate::host::EventHub;
use crate::model::{container_height, ItemIndex, ViewportState};
use crate::view_state::{MountedVirtualizer, ScrollPosition, Virtualizer, VirtualizerConfig};
use constants::{MOUSE_SCROLL_ROWS, QUIT_HINT, STATUS_BAR_HEIGHT};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Item renderer used by the terminal list.
pub type ItemRenderer = Box<dyn Fn(&String, ItemIndex) -> Text<'static>>;

/// Build the item renderer: a right-aligned 1-based index followed by the
/// item label, on the item's first row.
pub fn item_renderer(styles: &ListStyles) -> ItemRenderer {
    let index_style = styles.index;
    Box::new(move |label: &String, index: ItemIndex| {
        Text::from(Line::from(vec![
            Span::styled(format!("{:>7} ", index.display()), index_style),
            Span::raw(label.clone()),
        ]))
    })
}

/// Generate `count` demo labels.
pub fn demo_items(count: usize) -> Vec<String> {
    const WORDS: [&str; 8] = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    ];
    (0..count)
        .map(|i| format!("{} {:#06x}", WORDS[i % WORDS.len()], i))
        .collect()
}

/// Rows the list occupies: the container height, limited by the terminal
/// rows left over after the status bar.
pub fn viewport_rows(terminal_height: u16, container_height: u64) -> u32 {
    let available = u64::from(terminal_height.saturating_sub(STATUS_BAR_HEIGHT));
    // Bounded by a u16.
    available.min(container_height) as u32
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    hub: EventHub,
    list: MountedVirtualizer<String, ItemRenderer>,
    styles: ListStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        items: Vec<String>,
        config: VirtualizerConfig,
        styles: ListStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, items, config, styles)
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal events and redraws after each one. Returns when
    /// the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = event::read()?;
            if self.handle_event(event) {
                return Ok(());
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build the app on an existing terminal.
    ///
    /// The host viewport starts at offset 0 with the height the list can
    /// occupy in this terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        items: Vec<String>,
        config: VirtualizerConfig,
        styles: ListStyles,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let container = container_height(items.len(), config.item_height(), config.max_height());
        let rows = viewport_rows(size.height, container);

        let hub = EventHub::new(ViewportState::new(0, rows));
        let renderer = item_renderer(&styles);
        let list = Virtualizer::new(items, config, renderer).mount(&hub);

        info!(
            items = list.items().len(),
            rows,
            terminal_height = size.height,
            "list mounted"
        );

        Ok(Self {
            terminal,
            hub,
            list,
            styles,
        })
    }

    /// Handle one terminal event.
    ///
    /// Returns true if the app should quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            Event::Resize(_, height) => {
                self.handle_resize(height);
                false
            }
            _ => false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let viewport = self.list.viewport();
        let offset = viewport.scroll_offset;
        let item = i64::from(self.list.config().item_height().get());
        let page = i64::from(viewport.viewport_height).max(1);

        let target = match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => ScrollPosition::scrolled_by(offset, -item),
            KeyCode::Down | KeyCode::Char('j') => ScrollPosition::scrolled_by(offset, item),
            KeyCode::PageUp => ScrollPosition::scrolled_by(offset, -page),
            KeyCode::PageDown => ScrollPosition::scrolled_by(offset, page),
            KeyCode::Home | KeyCode::Char('g') => ScrollPosition::Top,
            KeyCode::End | KeyCode::Char('G') => ScrollPosition::Bottom,
            _ => return false,
        };

        self.scroll_to(target);
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let offset = self.list.viewport().scroll_offset;
        let target = match mouse.kind {
            MouseEventKind::ScrollUp => ScrollPosition::scrolled_by(offset, -MOUSE_SCROLL_ROWS),
            MouseEventKind::ScrollDown => ScrollPosition::scrolled_by(offset, MOUSE_SCROLL_ROWS),
            _ => return,
        };
        self.scroll_to(target);
    }

    fn handle_resize(&mut self, height: u16) {
        let rows = viewport_rows(height, self.list.container_height());
        debug!(height, rows, "terminal resized");
        self.hub.resize(rows);

        // A taller viewport can leave the offset past the new maximum.
        let current = self.list.viewport().scroll_offset;
        self.scroll_to(ScrollPosition::AtOffset(current));
    }

    /// Resolve `position` against the current layout and scroll the host
    /// there. Nothing is dispatched when the offset would not change.
    pub fn scroll_to(&mut self, position: ScrollPosition) {
        let viewport = self.list.viewport();
        let offset = position.resolve(
            self.list.content_height(),
            u64::from(viewport.viewport_height),
            self.list.config().item_height(),
        );
        if offset != viewport.scroll_offset {
            debug!(?position, offset = offset.get(), "scroll");
            self.hub.scroll_to(offset);
        }
    }

    /// Left part of the status bar. The key hint is drawn separately so a
    /// narrow terminal truncates this text first.
    fn status_line(&self) -> Line<'static> {
        let total = self.list.items().len();
        let text = match self.list.window() {
            Some(window) => format!(
                " rendered {}-{} of {} | offset {}",
                window.first().display(),
                window.last().display(),
                total,
                self.list.viewport().scroll_offset.get(),
            ),
            None => " 0 items".to_string(),
        };
        Line::from(text)
    }

    /// Render a single frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let tree = self.list.render();
        let status = self.status_line();
        let rows = self.list.viewport().viewport_height;
        let styles = &self.styles;

        self.terminal.draw(|frame| {
            let [list_area, status_area] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(frame.area());

            let list_height = if tree.is_some() {
                u16::try_from(rows).unwrap_or(u16::MAX)
            } else {
                1
            };
            let list_area = Rect {
                height: list_area.height.min(list_height),
                ..list_area
            };

            frame.render_widget(VirtualListView::new(tree.as_ref(), styles), list_area);
            let hint_width = u16::try_from(QUIT_HINT.len()).unwrap_or(u16::MAX);
            let [info_area, hint_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Length(hint_width)])
                    .areas(status_area);
            frame.render_widget(Paragraph::new(status).style(styles.status_bar), info_area);
            frame.render_widget(
                Paragraph::new(QUIT_HINT)
                    .alignment(Alignment::Right)
                    .style(styles.status_bar),
                hint_area,
            );
        })?;

        Ok(())
    }

    /// The mounted list.
    pub fn list(&self) -> &MountedVirtualizer<String, ItemRenderer> {
        &self.list
    }

    /// The viewport host.
    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    /// Terminal, for buffer inspection with `TestBackend`.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable terminal, for resizing a `TestBackend`.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Restores the terminal when dropped, including during unwinding.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Run the TUI over `items` until the user quits.
///
/// The terminal is restored on every exit path, including setup failures
/// and panics.
pub fn run_with_config(
    items: Vec<String>,
    config: VirtualizerConfig,
    styles: ListStyles,
) -> Result<(), TuiError> {
    let _guard = TerminalGuard;
    let mut app = TuiApp::new(items, config, styles)?;
    app.run()
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
