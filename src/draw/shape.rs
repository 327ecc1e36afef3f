//! Geometry of a single drawing operation.

use crate::util::{self, Point};

/// One immediate-mode drawing operation.
///
/// Shapes are not retained: each is built from the drag positions, rendered
/// once onto the surface, and dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand piece between two consecutive pointer positions
    Segment {
        from: Point,
        to: Point,
    },
    /// Straight line from the drag start to the pointer
    Line {
        from: Point,
        to: Point,
    },
    /// Axis-aligned rectangle, normalized to a non-negative size
    Rect {
        /// Top-left X coordinate
        x: f64,
        /// Top-left Y coordinate
        y: f64,
        /// Width in pixels
        w: f64,
        /// Height in pixels
        h: f64,
    },
    /// Circle centered on the drag start
    Circle {
        center: Point,
        radius: f64,
    },
    /// Isosceles triangle symmetric about the vertical through the drag start
    Triangle {
        vertices: [Point; 3],
    },
}

impl Shape {
    /// Rectangle with opposite corners `a` and `b`.
    pub fn rect_between(a: Point, b: Point) -> Self {
        let (x, y, w, h) = util::normalize_rect(a, b);
        Shape::Rect { x, y, w, h }
    }

    /// Circle centered at `center` passing through `edge`.
    pub fn circle_through(center: Point, edge: Point) -> Self {
        Shape::Circle {
            center,
            radius: util::circle_radius(center, edge),
        }
    }

    /// Triangle with vertices `start`, `current`, and `current` mirrored across `start.x`.
    pub fn triangle_from(start: Point, current: Point) -> Self {
        Shape::Triangle {
            vertices: [start, current, util::mirrored_vertex(start, current)],
        }
    }

    /// Whether the shape can be filled (closed outline).
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Shape::Rect { .. } | Shape::Circle { .. } | Shape::Triangle { .. }
        )
    }
}
