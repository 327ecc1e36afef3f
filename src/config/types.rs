//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas settings.
///
/// Controls the raster surface created at startup.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background color, also painted by the eraser and by clear
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the tool and paint style active when the canvas first opens.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default paint color, used for both strokes and fills
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_line_width")]
    pub default_width: f64,

    /// Whether shape tools start in fill mode
    #[serde(default)]
    pub fill_enabled: bool,

    /// Tool selected at startup
    #[serde(default)]
    pub default_tool: Tool,

    /// Antialias strokes and fills. When disabled, pixel coverage is
    /// all-or-nothing, so erasing a stroke restores the background exactly.
    #[serde(default)]
    pub antialias: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_line_width(),
            fill_enabled: false,
            default_tool: Tool::default(),
            antialias: false,
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to (supports `~/`)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Image format: "jpeg" (lossy) or "png"
    #[serde(default)]
    pub format: ExportFormat,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            format: ExportFormat::default(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl ExportConfig {
    /// Resolves the configured directory, expanding a leading `~/`.
    pub fn directory_path(&self) -> PathBuf {
        crate::export::expand_tilde(&self.directory)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    5.0
}

fn default_export_directory() -> String {
    dirs::picture_dir()
        .map(|dir| dir.join("Sketchpad").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/Sketchpad".to_string())
}

fn default_jpeg_quality() -> u8 {
    90
}
