//! Drawing controller and stroke session state.

use crate::config::Config;
use crate::draw::{Color, DrawError, PaintStyle, RasterSurface, Snapshot, StyleUpdate, WHITE};
use crate::export::{self, ExportError, ExportSettings, ExportedImage};
use crate::input::tool::Tool;
use crate::util::Point;

/// State of one pointer-down-to-pointer-up gesture.
///
/// The tool and paint style are captured when the gesture starts, so every
/// preview frame is computed from (snapshot, start, current point, tool, style)
/// only. Changes made mid-gesture apply to the next gesture.
#[derive(Debug)]
pub struct StrokeSession {
    /// Where the pointer went down
    pub(super) start: Point,
    /// Last freehand position; the next brush/eraser segment starts here
    pub(super) last_point: Point,
    /// Tool in effect for this gesture
    pub(super) tool: Tool,
    /// Paint style in effect for this gesture
    pub(super) style: PaintStyle,
    /// Surface contents before the gesture began
    pub(super) snapshot: Snapshot,
}

impl StrokeSession {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Current drawing mode state machine.
///
/// A stroke session exists exactly while the pointer is down after having
/// gone down inside the surface.
#[derive(Debug, Default)]
pub enum DrawingState {
    /// Not drawing - waiting for a pointer-down
    #[default]
    Idle,
    /// Pointer is down; a gesture is in progress
    Drawing(StrokeSession),
}

/// The drawing surface controller.
///
/// Owns the raster surface, the tool selection, the paint style and the
/// active stroke session. All operations run on the caller's thread, one at
/// a time; pixel mutations on the surface are the only output.
pub struct DrawingController {
    /// The canvas; only the controller draws on it
    pub(super) surface: RasterSurface,
    /// Currently selected tool
    pub(super) tool: Tool,
    /// Current paint settings
    pub(super) style: PaintStyle,
    /// Current drawing mode state machine
    pub(super) state: DrawingState,
}

impl std::fmt::Debug for DrawingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingController")
            .field("surface", &self.surface)
            .field("tool", &self.tool)
            .field("style", &self.style)
            .field("state", &self.state)
            .finish()
    }
}

impl DrawingController {
    /// Creates a controller with a white surface, the brush tool and the default style.
    pub fn new(width: i32, height: i32) -> Result<Self, DrawError> {
        Self::with_defaults(
            width,
            height,
            WHITE,
            false,
            Tool::default(),
            PaintStyle::default(),
        )
    }

    /// Creates a controller with explicit defaults.
    ///
    /// # Arguments
    /// * `width`, `height` - Surface size in pixels
    /// * `background` - Background color, painted at startup, by `clear` and by the eraser
    /// * `antialias` - Whether strokes and fills are antialiased
    /// * `tool` - Initially selected tool
    /// * `style` - Initial paint style
    pub fn with_defaults(
        width: i32,
        height: i32,
        background: Color,
        antialias: bool,
        tool: Tool,
        style: PaintStyle,
    ) -> Result<Self, DrawError> {
        let surface = RasterSurface::new(width, height, background, antialias)?;
        log::debug!(
            "Drawing surface initialized at {}x{} (background {})",
            width,
            height,
            background
        );
        Ok(Self {
            surface,
            tool,
            style,
            state: DrawingState::Idle,
        })
    }

    /// Creates a controller from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, DrawError> {
        Self::with_defaults(
            config.canvas.width,
            config.canvas.height,
            config.background(),
            config.drawing.antialias,
            config.drawing.default_tool,
            config.initial_style(),
        )
    }

    /// Sizes the surface to the given bounds and fills it with the background.
    ///
    /// Discards all drawn content and any active stroke session. On an invalid
    /// size the existing surface is kept untouched.
    pub fn initialize(&mut self, width: i32, height: i32) -> Result<(), DrawError> {
        if width < 1 || height < 1 {
            return Err(DrawError::InvalidSize { width, height });
        }
        self.surface.resize(width, height)?;
        self.state = DrawingState::Idle;
        log::info!("Surface initialized at {}x{}", width, height);
        Ok(())
    }

    /// Selects the tool used by the next stroke.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed from {} to {}", self.tool, tool);
        }
        self.tool = tool;
    }

    /// Applies a partial style change, used by the next stroke.
    pub fn set_style(&mut self, update: &StyleUpdate) {
        self.style.apply(update);
        log::debug!("Style updated: {:?}", self.style);
    }

    /// Resets the surface to the background color, discarding everything drawn.
    pub fn clear(&mut self) {
        self.state = DrawingState::Idle;
        if let Err(err) = self.surface.clear() {
            log::warn!("Failed to clear surface: {err}");
        }
        log::info!("Canvas cleared");
    }

    /// Encodes the current surface contents, named after the current timestamp.
    ///
    /// Read-only: the surface and session are untouched.
    pub fn export(&self, settings: &ExportSettings) -> Result<ExportedImage, ExportError> {
        export::export_surface(&self.surface, settings)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> &PaintStyle {
        &self.style
    }

    pub fn background(&self) -> Color {
        self.surface.background()
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Read access to the canvas (pixel reads, encoding).
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Returns true while a stroke session is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing(_))
    }

    /// The active stroke session, if any.
    pub fn session(&self) -> Option<&StrokeSession> {
        match &self.state {
            DrawingState::Drawing(session) => Some(session),
            DrawingState::Idle => None,
        }
    }
}
