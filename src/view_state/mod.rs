//! View-state layer - window calculation, scroll positions and the
//! virtualizer container.
//!
//! # Module Structure
//!
//! - `window`: WindowCalculator - viewport to inclusive item range
//! - `visible_range`: VisibleWindow - result of the window calculation
//! - `tracker`: WindowTracker - Idle/Recomputing state machine
//! - `virtualizer`: Virtualizer / MountedVirtualizer - host lifecycle and rendering
//! - `render_tree`: RenderTree - container, spacer and positioned items
//! - `scroll`: ScrollPosition - semantic scroll position enum

pub mod render_tree;
pub mod scroll;
pub mod tracker;
pub mod virtualizer;
pub mod visible_range;
pub mod window;

pub use render_tree::{ContainerNode, HostAttributes, PositionedItem, RenderTree, SpacerNode};
pub use scroll::ScrollPosition;
pub use tracker::{Phase, WindowTracker};
pub use virtualizer::{MountedVirtualizer, Virtualizer, VirtualizerConfig, VirtualizerConfigBuilder};
pub use visible_range::VisibleWindow;
pub use window::{compute_window, WindowCalculator};
