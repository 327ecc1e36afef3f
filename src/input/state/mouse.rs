use crate::draw::{DrawError, PaintStyle, RasterSurface, Shape, Snapshot, render_shape};
use crate::input::tool::Tool;
use crate::util::Point;
use log::{debug, warn};

use super::{DrawingController, DrawingState, StrokeSession};

impl DrawingController {
    /// Processes a pointer-down event.
    ///
    /// # Behavior
    /// - While idle and inside the surface: opens a stroke session at (x, y),
    ///   capturing a snapshot of the surface plus the current tool and style
    /// - Outside the surface, or while a gesture is already active: ignored
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);

        if self.is_drawing() {
            debug!("Ignoring pointer-down at ({x}, {y}): stroke already active");
            return;
        }
        if !self.surface.contains(point) {
            debug!("Ignoring pointer-down at ({x}, {y}): outside surface");
            return;
        }

        let snapshot = match self.surface.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Failed to snapshot surface, stroke not started: {err}");
                return;
            }
        };

        self.state = DrawingState::Drawing(StrokeSession {
            start: point,
            last_point: point,
            tool: self.tool,
            style: self.style,
            snapshot,
        });
        debug!("Started {} stroke at ({x}, {y})", self.tool);
    }

    /// Processes pointer motion while the button is held.
    ///
    /// # Behavior
    /// - Brush: draws a segment from the last point to (x, y) on top of what is there
    /// - Eraser: same, in the background color
    /// - Rectangle, circle, triangle, line: restores the snapshot, then draws the
    ///   shape spanned by the start point and (x, y)
    /// - No active session: no-op
    pub fn continue_stroke(&mut self, x: f64, y: f64) {
        let background = self.surface.background();
        let DrawingState::Drawing(session) = &mut self.state else {
            return;
        };

        let current = Point::new(x, y);
        let start = session.start;
        let mut style = session.style;

        let shape = match session.tool {
            Tool::Brush | Tool::Eraser => {
                if session.tool == Tool::Eraser {
                    style = style.with_stroke_color(background);
                }
                let from = session.last_point;
                session.last_point = current;
                Shape::Segment { from, to: current }
            }
            Tool::Rectangle => Shape::rect_between(start, current),
            Tool::Circle => Shape::circle_through(start, current),
            Tool::Triangle => Shape::triangle_from(start, current),
            Tool::Line => Shape::Line {
                from: start,
                to: current,
            },
        };

        let snapshot = (!session.tool.is_freehand()).then_some(&session.snapshot);
        let result = paint_frame(&self.surface, snapshot, &shape, &style);
        if let Err(err) = result {
            warn!("Failed to draw {:?}: {err}", shape);
        }
    }

    /// Processes a pointer-up event.
    ///
    /// Ends the stroke session; the last drawn frame stays on the surface.
    /// No-op if no session is active.
    pub fn end_stroke(&mut self) {
        if let DrawingState::Drawing(session) = std::mem::take(&mut self.state) {
            debug!(
                "Finished {} stroke started at ({}, {})",
                session.tool, session.start.x, session.start.y
            );
        }
    }
}

/// Draws one frame: optionally restores the pre-gesture snapshot, then renders the shape.
fn paint_frame(
    surface: &RasterSurface,
    snapshot: Option<&Snapshot>,
    shape: &Shape,
    style: &PaintStyle,
) -> Result<(), DrawError> {
    if let Some(snapshot) = snapshot {
        surface.restore(snapshot)?;
    }
    let ctx = surface.context()?;
    render_shape(&ctx, shape, style)?;
    Ok(())
}
