//! Library exports for the sketchpad drawing canvas.
//!
//! Exposes the drawing controller together with the surface, configuration
//! and export modules it relies on so that front ends (the bundled CLI, or an
//! embedding GUI) can drive the same canvas.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::DrawingController;
