//! Utility functions for colors and drag geometry.
//!
//! This module provides:
//! - Color name mapping for config files and scripted color pickers
//! - Drag geometry: circle radius, mirrored triangle vertex, rectangle normalization

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// A surface-local position in pixels.
///
/// Coordinates are fractional so pointer positions can be forwarded to Cairo
/// untouched; the origin is the top-left corner of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Radius of a circle dragged out from `center` to `edge`.
pub fn circle_radius(center: Point, edge: Point) -> f64 {
    center.distance_to(edge)
}

/// Third vertex of the isosceles drag triangle.
///
/// The vertex mirrors `current` horizontally across the vertical line through
/// `start`, staying on the same row as `current`: `(2 * start.x - current.x, current.y)`.
pub fn mirrored_vertex(start: Point, current: Point) -> Point {
    Point {
        x: 2.0 * start.x - current.x,
        y: current.y,
    }
}

/// Normalizes a corner-to-corner drag into `(x, y, width, height)`.
///
/// The returned origin is the top-left corner and both sizes are non-negative,
/// regardless of the drag direction.
pub fn normalize_rect(a: Point, b: Point) -> (f64, f64, f64, f64) {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    (x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the color parser.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "gray"/"grey"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}
