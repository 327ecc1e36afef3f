//! Configuration enum types.

use crate::draw::{Color, ColorParseError};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex or CSS-style color
/// default_color = "#ff8000"
/// background = "rgb(250, 250, 245)"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, gray, white, black),
    /// `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`], reporting malformed strings.
    pub fn parse(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorSpec::Name(name) => name.parse(),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the specification to a [`Color`], using `fallback` with a
    /// warning when the string cannot be parsed.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.parse().unwrap_or_else(|err| {
            warn!("{err}, using {fallback}");
            fallback
        })
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ORANGE, WHITE};

    #[test]
    fn parses_all_spellings() {
        assert_eq!(ColorSpec::Name("black".into()).parse().unwrap(), BLACK);
        assert_eq!(ColorSpec::Name("#fff".into()).parse().unwrap(), WHITE);
        assert_eq!(
            ColorSpec::Rgb([255, 128, 0]).parse().unwrap().to_rgba8(),
            ORANGE.to_rgba8()
        );
    }

    #[test]
    fn unknown_names_fall_back() {
        let spec = ColorSpec::Name("mauve-ish".into());
        assert!(spec.parse().is_err());
        assert_eq!(spec.to_color_or(WHITE), WHITE);
    }

    #[test]
    fn untagged_deserialization() {
        #[derive(Deserialize)]
        struct Holder {
            color: ColorSpec,
        }

        let named: Holder = toml::from_str("color = \"#123456\"").unwrap();
        assert_eq!(named.color, ColorSpec::Name("#123456".into()));

        let rgb: Holder = toml::from_str("color = [1, 2, 3]").unwrap();
        assert_eq!(rgb.color, ColorSpec::Rgb([1, 2, 3]));
    }
}
