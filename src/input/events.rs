//! Input events and scripted event sequences.
//!
//! Front ends translate their native pointer/toolbar events into
//! [`InputEvent`]s; the CLI reads them from a JSON script.

use super::tool::Tool;
use crate::config::ColorSpec;
use crate::draw::{ColorParseError, StyleUpdate};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single input event, tagged by `"event"`.
///
/// # Example JSON
/// ```json
/// { "event": "select-tool", "tool": "circle" }
/// { "event": "set-style", "color": "#e02424", "line_width": 8, "fill_enabled": true }
/// { "event": "pointer-down", "x": 40, "y": 40 }
/// { "event": "pointer-move", "x": 70, "y": 80 }
/// { "event": "pointer-up" }
/// { "event": "export" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Primary button pressed at a surface-local position
    PointerDown { x: f64, y: f64 },
    /// Pointer moved to a surface-local position
    PointerMove { x: f64, y: f64 },
    /// Primary button released
    PointerUp,
    /// Toolbar tool selection
    SelectTool { tool: Tool },
    /// Style controls: color swatch/picker, width slider, fill toggle
    SetStyle {
        /// Sets both stroke and fill color
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<ColorSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke_color: Option<ColorSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill_color: Option<ColorSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill_enabled: Option<bool>,
    },
    /// Reset the surface to the background color
    Clear,
    /// Request an encoded image of the surface
    Export,
}

impl InputEvent {
    /// Converts a `SetStyle` event into a [`StyleUpdate`].
    ///
    /// Returns `Ok(None)` for every other event. An explicit `stroke_color` or
    /// `fill_color` wins over `color`.
    pub fn style_update(&self) -> Result<Option<StyleUpdate>, ColorParseError> {
        let InputEvent::SetStyle {
            color,
            stroke_color,
            fill_color,
            line_width,
            fill_enabled,
        } = self
        else {
            return Ok(None);
        };

        let mut update = match color {
            Some(spec) => StyleUpdate::color(spec.parse()?),
            None => StyleUpdate::default(),
        };
        if let Some(spec) = stroke_color {
            update.stroke_color = Some(spec.parse()?);
        }
        if let Some(spec) = fill_color {
            update.fill_color = Some(spec.parse()?);
        }
        update.line_width = *line_width;
        update.fill_enabled = *fill_enabled;

        Ok(Some(update))
    }
}

/// Actions the controller hands back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The user asked for an image export
    Export,
}

/// A recorded sequence of input events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<InputEvent>,
}

impl Script {
    /// Parses a script from JSON text and checks every color in it.
    pub fn from_json(text: &str) -> Result<Self> {
        let script: Script = serde_json::from_str(text).context("Invalid script JSON")?;
        script.validate()?;
        Ok(script)
    }

    /// Loads a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        let script = Self::from_json(&text)
            .with_context(|| format!("Failed to load script from {}", path.display()))?;
        log::info!(
            "Loaded {} events from {}",
            script.events.len(),
            path.display()
        );
        Ok(script)
    }

    /// Fails on the first `set-style` event whose colors do not parse.
    pub fn validate(&self) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            event
                .style_update()
                .with_context(|| format!("Event #{index} has an invalid color"))?;
        }
        Ok(())
    }
}
