//! Cairo-based rendering functions for shapes.

use super::shape::Shape;
use super::style::PaintStyle;
use crate::util::Point;

/// Renders a single shape to a Cairo context using the given paint style.
///
/// Segments and lines are always stroked with `stroke_color`. Rectangles,
/// circles and triangles are filled with `fill_color` when `fill_enabled`
/// is set, otherwise outlined with `stroke_color`.
///
/// Open strokes (brush segments and lines) use round caps and round joins.
/// Closed outlines (rectangle, triangle) use miter joins.
///
/// Cairo errors are returned; the surface keeps whatever was painted before
/// the failure.
pub fn render_shape(
    ctx: &cairo::Context,
    shape: &Shape,
    style: &PaintStyle,
) -> Result<(), cairo::Error> {
    ctx.new_path();
    ctx.set_line_width(style.line_width);

    match shape {
        Shape::Segment { from, to } => {
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);
            trace_line(ctx, *from, *to);
        }
        Shape::Line { from, to } => {
            ctx.set_line_cap(cairo::LineCap::Round);
            ctx.set_line_join(cairo::LineJoin::Round);
            trace_line(ctx, *from, *to);
        }
        Shape::Rect { x, y, w, h } => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.rectangle(*x, *y, *w, *h);
        }
        Shape::Circle { center, radius } => {
            ctx.arc(
                center.x,
                center.y,
                *radius,
                0.0,
                2.0 * std::f64::consts::PI,
            );
        }
        Shape::Triangle { vertices } => {
            ctx.set_line_join(cairo::LineJoin::Miter);
            let [a, b, c] = *vertices;
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.line_to(c.x, c.y);
            ctx.close_path();
        }
    }

    if shape.is_closed() && style.fill_enabled {
        style.fill_color.apply_source(ctx);
        ctx.fill()
    } else {
        style.stroke_color.apply_source(ctx);
        ctx.stroke()
    }
}

fn trace_line(ctx: &cairo::Context, from: Point, to: Point) {
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
}
