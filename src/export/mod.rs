//! Image export of the drawing surface.
//!
//! Encodes the current surface as PNG or JPEG, names the result after the
//! current Unix time in milliseconds, and writes it to disk.

mod encode;
mod file;
mod types;

pub use encode::encode_surface;
pub use file::{
    current_timestamp_millis, ensure_directory_exists, expand_tilde, generate_filename,
    save_export,
};
pub use types::{ExportError, ExportFormat, ExportSettings, ExportedImage};

use crate::draw::RasterSurface;

/// Encodes the surface and names it after the current timestamp.
pub fn export_surface(
    surface: &RasterSurface,
    settings: &ExportSettings,
) -> Result<ExportedImage, ExportError> {
    let bytes = encode_surface(surface, settings)?;
    let file_name = generate_filename(current_timestamp_millis(), settings.format);
    log::debug!("Encoded {} ({} bytes)", file_name, bytes.len());
    Ok(ExportedImage {
        file_name,
        format: settings.format,
        bytes,
    })
}
