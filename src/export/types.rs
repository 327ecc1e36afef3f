//! Data types for image export.

use crate::draw::DrawError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Encoded image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless PNG
    Png,
    /// Lossy JPEG (alpha is dropped)
    #[default]
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Png => f.write_str("png"),
            ExportFormat::Jpeg => f.write_str("jpeg"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            other => Err(format!("unknown export format '{other}' (expected png or jpeg)")),
        }
    }
}

/// How the surface is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// JPEG quality, 1-100; ignored for PNG
    pub jpeg_quality: u8,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            jpeg_quality: 90,
        }
    }
}

/// An encoded still image of the surface, ready to be written out.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    /// `<unix-timestamp-millis>.<ext>`
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

/// Errors that can occur while exporting the surface.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read surface pixels: {0}")]
    Surface(#[from] DrawError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to save image: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
        assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
        assert!("gif".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn extensions_and_defaults() {
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportSettings::default().format, ExportFormat::Jpeg);
    }

    #[test]
    fn serde_accepts_jpg_alias() {
        let format: ExportFormat = serde_json::from_str("\"jpg\"").unwrap();
        assert_eq!(format, ExportFormat::Jpeg);
        assert_eq!(serde_json::to_string(&ExportFormat::Png).unwrap(), "\"png\"");
    }
}
