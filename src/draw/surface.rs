//! Raster surface backed by a Cairo ARGB32 image.
//!
//! Every drawing operation gets a fresh [`cairo::Context`] so the surface is
//! never shared with a long-lived context and its pixels can always be read
//! back directly.

use super::color::{Color, Rgba};
use crate::util::Point;
use thiserror::Error;

/// Largest width or height Cairo accepts for an image surface.
pub const MAX_SURFACE_DIMENSION: i32 = 32767;

/// Errors raised by surface creation and pixel access.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("cannot access surface pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// A full copy of surface pixels.
///
/// Produced by [`RasterSurface::snapshot`] and written back with
/// [`RasterSurface::restore`]; the copy is immutable once taken.
pub struct Snapshot {
    surface: cairo::ImageSurface,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .finish()
    }
}

impl Snapshot {
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }
}

/// The drawing canvas: a pixel grid with an immediate-mode drawing API.
pub struct RasterSurface {
    surface: cairo::ImageSurface,
    background: Color,
    antialias: cairo::Antialias,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .field("antialias", &self.antialias)
            .finish()
    }
}

fn create_image(width: i32, height: i32) -> Result<cairo::ImageSurface, DrawError> {
    if !(1..=MAX_SURFACE_DIMENSION).contains(&width)
        || !(1..=MAX_SURFACE_DIMENSION).contains(&height)
    {
        return Err(DrawError::InvalidSize { width, height });
    }
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        width,
        height,
    )?)
}

/// Copies `source` over `target` pixel for pixel.
fn copy_pixels(target: &cairo::ImageSurface, source: &cairo::ImageSurface) -> Result<(), DrawError> {
    let ctx = cairo::Context::new(target)?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(source, 0.0, 0.0)?;
    ctx.paint()?;
    Ok(())
}

/// Reads one premultiplied ARGB32 pixel and converts it to straight RGBA.
fn unpack_argb32(bytes: &[u8]) -> Rgba {
    let value = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let a = (value >> 24) as u8;
    if a == 0 {
        return Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        };
    }
    let unpremultiply = |c: u32| ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8;
    Rgba {
        r: unpremultiply((value >> 16) & 0xff),
        g: unpremultiply((value >> 8) & 0xff),
        b: unpremultiply(value & 0xff),
        a,
    }
}

impl RasterSurface {
    /// Creates a surface of the given size filled with `background`.
    pub fn new(
        width: i32,
        height: i32,
        background: Color,
        antialias: bool,
    ) -> Result<Self, DrawError> {
        let surface = Self {
            surface: create_image(width, height)?,
            background,
            antialias: if antialias {
                cairo::Antialias::Default
            } else {
                cairo::Antialias::None
            },
        };
        surface.fill(background)?;
        Ok(surface)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether drawing operations are antialiased.
    pub fn antialias(&self) -> bool {
        self.antialias != cairo::Antialias::None
    }

    /// Read access to the underlying Cairo image (for encoding).
    pub fn image(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Returns true if the point lies inside the surface.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width() as f64
            && point.y < self.height() as f64
    }

    /// Opens a drawing context with the surface's antialias mode applied.
    ///
    /// Drop the context before reading pixels back.
    pub fn context(&self) -> Result<cairo::Context, DrawError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_antialias(self.antialias);
        Ok(ctx)
    }

    /// Re-sizes the surface (only when the size changed) and fills it with the background.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), DrawError> {
        if width != self.width() || height != self.height() {
            self.surface = create_image(width, height)?;
            log::debug!("Surface resized to {}x{}", width, height);
        }
        self.fill(self.background)
    }

    /// Replaces every pixel with `color`.
    pub fn fill(&self, color: Color) -> Result<(), DrawError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_operator(cairo::Operator::Source);
        color.apply_source(&ctx);
        ctx.paint()?;
        Ok(())
    }

    /// Replaces every pixel with the background color.
    pub fn clear(&self) -> Result<(), DrawError> {
        self.fill(self.background)
    }

    /// Takes a full copy of the current pixels.
    pub fn snapshot(&self) -> Result<Snapshot, DrawError> {
        let copy = create_image(self.width(), self.height())?;
        copy_pixels(&copy, &self.surface)?;
        Ok(Snapshot { surface: copy })
    }

    /// Writes a snapshot back, replacing every pixel.
    ///
    /// Fails with [`DrawError::InvalidSize`] (carrying the snapshot size) when
    /// the snapshot was taken at a different size; the surface is left as is.
    pub fn restore(&self, snapshot: &Snapshot) -> Result<(), DrawError> {
        if snapshot.width() != self.width() || snapshot.height() != self.height() {
            return Err(DrawError::InvalidSize {
                width: snapshot.width(),
                height: snapshot.height(),
            });
        }
        copy_pixels(&self.surface, &snapshot.surface)
    }

    /// Reads a single pixel as straight (non-premultiplied) RGBA.
    ///
    /// Returns `None` for coordinates outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut result = None;
        if let Err(err) = self.surface.with_data(|data| {
            if let Some(bytes) = data.get(offset..offset + 4) {
                result = Some(unpack_argb32(bytes));
            }
        }) {
            log::warn!("Failed to read pixel ({x}, {y}): {err}");
        }
        result
    }

    /// Copies all pixels out as row-major straight RGBA bytes.
    pub fn to_rgba8(&self) -> Result<Vec<u8>, DrawError> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let stride = self.surface.stride() as usize;
        let mut out = Vec::with_capacity(width * height * 4);

        self.surface.with_data(|data| {
            for row in data.chunks(stride).take(height) {
                for px in row[..width * 4].chunks_exact(4) {
                    let Rgba { r, g, b, a } = unpack_argb32(px);
                    out.extend_from_slice(&[r, g, b, a]);
                }
            }
        })?;

        Ok(out)
    }
}
