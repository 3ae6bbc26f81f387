//! vlist - windowed list virtualizer
//!
//! Renders only the slice of a long, fixed-row-height list that intersects
//! the viewport (plus a small overscan), while a full-height spacer keeps the
//! scrollbar proportional to the whole list.
//!
//! The core (`model`, `host`, `view_state`) is pure and single-threaded. The
//! `view` module adapts it to a terminal with ratatui and crossterm.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
