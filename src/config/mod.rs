//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the canvas size and
//! background, drawing defaults, and image export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::draw::{BLACK, Color, MAX_LINE_WIDTH, MIN_LINE_WIDTH, PaintStyle, WHITE};
use crate::export::ExportSettings;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest canvas width/height accepted from the config file.
pub const MAX_CANVAS_DIMENSION: i32 = 8192;

const DEFAULT_CONFIG_TOML: &str = r##"# sketchpad configuration

[canvas]
# Surface size in pixels (1 - 8192)
width = 800
height = 600
# Background color: a name, "#rrggbb", "rgb(r, g, b)" or [r, g, b]
background = "white"

[drawing]
default_color = "black"
# Stroke width in pixels (1.0 - 100.0)
default_width = 5.0
fill_enabled = false
# brush, eraser, rectangle, circle, triangle or line
default_tool = "brush"
antialias = false

[export]
directory = "~/Pictures/Sketchpad"
# "jpeg" or "png"
format = "jpeg"
jpeg_quality = 90
"##;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "#fffff0"
///
/// [drawing]
/// default_color = "red"
/// default_width = 3.0
/// default_tool = "circle"
///
/// [export]
/// format = "png"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Drawing tool defaults (tool, color, width, fill mode)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `drawing.default_width`: 1.0 - 100.0
    /// - `export.jpeg_quality`: 1 - 100
    /// - colors must parse; unparseable colors fall back to the defaults
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_DIMENSION).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width, MAX_CANVAS_DIMENSION
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_DIMENSION);
        }

        if !(1..=MAX_CANVAS_DIMENSION).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height, MAX_CANVAS_DIMENSION
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_DIMENSION);
        }

        if !self.drawing.default_width.is_finite() {
            warn!(
                "Invalid default_width {}, falling back to 5.0",
                self.drawing.default_width
            );
            self.drawing.default_width = 5.0;
        } else if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&self.drawing.default_width) {
            warn!(
                "Invalid default_width {:.1}, clamping to {:.1}-{:.1} range",
                self.drawing.default_width, MIN_LINE_WIDTH, MAX_LINE_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        }

        if !(1..=100).contains(&self.export.jpeg_quality) {
            warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }

        if let Err(err) = self.canvas.background.parse() {
            warn!("Invalid canvas background: {err}, falling back to white");
            self.canvas.background = ColorSpec::from(WHITE);
        }

        if let Err(err) = self.drawing.default_color.parse() {
            warn!("Invalid default_color: {err}, falling back to black");
            self.drawing.default_color = ColorSpec::from(BLACK);
        }
    }

    /// Background color of the canvas.
    pub fn background(&self) -> Color {
        self.canvas.background.to_color_or(WHITE)
    }

    /// Paint style active at startup.
    pub fn initial_style(&self) -> PaintStyle {
        let color = self.drawing.default_color.to_color_or(BLACK);
        PaintStyle {
            stroke_color: color,
            fill_color: color,
            line_width: self
                .drawing
                .default_width
                .clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH),
            fill_enabled: self.drawing.fill_enabled,
        }
    }

    /// Export settings derived from the `[export]` section.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            format: self.export.format,
            jpeg_quality: self.export.jpeg_quality,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, DEFAULT_CONFIG_TOML)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
