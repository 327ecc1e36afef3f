//! Paint style shared by every draw operation.

use super::color::{BLACK, Color};

/// Smallest accepted stroke width in pixels.
pub const MIN_LINE_WIDTH: f64 = 1.0;
/// Largest accepted stroke width in pixels.
pub const MAX_LINE_WIDTH: f64 = 100.0;

/// Current paint settings.
///
/// Always reflects the latest setting; there is no history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    /// Color used for freehand strokes, lines and shape outlines
    pub stroke_color: Color,
    /// Color used for shape interiors when fill is enabled
    pub fill_color: Color,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Whether shape tools paint their interior instead of their outline
    pub fill_enabled: bool,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 5.0,
            fill_enabled: false,
        }
    }
}

/// A partial style change; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleUpdate {
    pub stroke_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub line_width: Option<f64>,
    pub fill_enabled: Option<bool>,
}

impl StyleUpdate {
    /// Sets both stroke and fill color, as picking a palette swatch does.
    pub fn color(color: Color) -> Self {
        Self {
            stroke_color: Some(color),
            fill_color: Some(color),
            ..Self::default()
        }
    }

    pub fn line_width(width: f64) -> Self {
        Self {
            line_width: Some(width),
            ..Self::default()
        }
    }

    pub fn fill_enabled(enabled: bool) -> Self {
        Self {
            fill_enabled: Some(enabled),
            ..Self::default()
        }
    }
}

impl PaintStyle {
    /// Applies a partial update.
    ///
    /// Widths are clamped to [`MIN_LINE_WIDTH`]..=[`MAX_LINE_WIDTH`]; non-finite
    /// widths are ignored. Both cases are logged.
    pub fn apply(&mut self, update: &StyleUpdate) {
        if let Some(color) = update.stroke_color {
            self.stroke_color = color;
        }
        if let Some(color) = update.fill_color {
            self.fill_color = color;
        }
        if let Some(width) = update.line_width {
            if !width.is_finite() {
                log::warn!("Ignoring non-finite line width {width}");
            } else {
                if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&width) {
                    log::warn!(
                        "Invalid line width {:.1}, clamping to {:.0}-{:.0} range",
                        width,
                        MIN_LINE_WIDTH,
                        MAX_LINE_WIDTH
                    );
                }
                self.line_width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
            }
        }
        if let Some(enabled) = update.fill_enabled {
            self.fill_enabled = enabled;
        }
    }

    /// Returns a copy with the stroke color replaced.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }
}
