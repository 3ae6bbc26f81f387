//! Domain model types (pure).
//!
//! Layout newtypes with smart constructors and the error taxonomy.

pub mod error;
pub mod types;

// Re-export for convenience
pub use error::{AppError, DimensionError};
pub use types::{
    container_height, content_height, raw_content_height, ItemHeight, ItemIndex, LayoutOffset,
    ViewportState, DEFAULT_OVERSCAN, SAFE_MAX_HEIGHT,
};
