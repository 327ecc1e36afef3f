//! Input handling and the drawing controller.
//!
//! This module turns pointer, toolbar and command events into drawing
//! operations. It holds the current tool and paint style and runs the stroke
//! session state machine that implements live shape preview.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Action, InputEvent, Script};
pub use state::{DrawingController, DrawingState, StrokeSession};
pub use tool::Tool;
