//! Rendering primitives and the raster surface (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with parsing and predefined constants
//! - [`PaintStyle`]: stroke/fill colors, line width and fill mode
//! - [`Shape`]: geometry of one drawing operation
//! - [`RasterSurface`]: the pixel canvas with snapshot/restore support
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod render;
pub mod shape;
pub mod style;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError, Rgba};
pub use render::render_shape;
pub use shape::Shape;
pub use style::{MAX_LINE_WIDTH, MIN_LINE_WIDTH, PaintStyle, StyleUpdate};
pub use surface::{DrawError, RasterSurface, Snapshot};

pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
