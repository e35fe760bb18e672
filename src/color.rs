//! Palette colors
//!
//! Colors are written in settings as CSS hex strings (`#RGB` or `#RRGGBB`)
//! and handed to the canvas as `rgb(r, g, b)` fill styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadDigit(s.to_string()));
        }

        // All digits are ASCII from here on, so byte slicing is safe
        let channel = |hex: &str| u8::from_str_radix(hex, 16).unwrap_or_default();
        match digits.len() {
            3 => Ok(Self::rgb(
                channel(&digits[0..1]) * 17,
                channel(&digits[1..2]) * 17,
                channel(&digits[2..3]) * 17,
            )),
            6 => Ok(Self::rgb(
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            )),
            _ => Err(ParseColorError::BadLength(s.to_string())),
        }
    }

    /// CSS fill style string
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!(Color::from_hex("#FF6B6B").unwrap(), Color::rgb(0xFF, 0x6B, 0x6B));
        assert_eq!(Color::from_hex("#333").unwrap(), Color::rgb(0x33, 0x33, 0x33));
        assert_eq!(Color::from_hex("#4ecdc4").unwrap(), Color::rgb(0x4E, 0xCD, 0xC4));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::from_hex("FF6B6B"),
            Err(ParseColorError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#FF6B"),
            Err(ParseColorError::BadLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ParseColorError::BadDigit(_))
        ));
        // Multi-byte input must not panic on slicing
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_css_and_display() {
        let c = Color::rgb(69, 183, 209);
        assert_eq!(c.to_css(), "rgb(69, 183, 209)");
        assert_eq!(c.to_string(), "#45B7D1");
    }
}
