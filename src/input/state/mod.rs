mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingController, DrawingState, StrokeSession};
