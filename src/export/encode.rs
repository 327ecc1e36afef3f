//! Surface encoding (PNG via Cairo, JPEG via `image`).

use super::types::{ExportError, ExportFormat, ExportSettings};
use crate::draw::RasterSurface;
use image::codecs::jpeg::JpegEncoder;

/// Encodes the current surface contents. Does not modify the surface.
pub fn encode_surface(
    surface: &RasterSurface,
    settings: &ExportSettings,
) -> Result<Vec<u8>, ExportError> {
    match settings.format {
        ExportFormat::Png => encode_png(surface),
        ExportFormat::Jpeg => encode_jpeg(surface, settings.jpeg_quality),
    }
}

fn encode_png(surface: &RasterSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    surface.image().write_to_png(&mut buffer)?;
    Ok(buffer)
}

fn encode_jpeg(surface: &RasterSurface, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgba = surface.to_rgba8()?;
    let rgb: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
        encoder.encode(
            &rgb,
            surface.width() as u32,
            surface.height() as u32,
            image::ExtendedColorType::Rgb8,
        )?;
    }
    Ok(buffer)
}
