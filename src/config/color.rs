//! Hex color values used for branding and chart series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `#RRGGBB` color parsed at load time.
///
/// Serializes back to the uppercase `#RRGGBB` form so exported
/// configuration keeps the shape authors wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color '{}' must start with '#'", s))?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color '{}' is not in #RRGGBB form", s));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("color '{}': {}", s, e))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brand_colors() {
        assert_eq!("#4F46E5".parse(), Ok(HexColor::new(0x4F, 0x46, 0xE5)));
        assert_eq!("#818cf8".parse(), Ok(HexColor::new(0x81, 0x8C, 0xF8)));
    }

    #[test]
    fn test_rejects_malformed_colors() {
        assert!("4F46E5".parse::<HexColor>().is_err());
        assert!("#4F46E".parse::<HexColor>().is_err());
        assert!("#4F46EZ".parse::<HexColor>().is_err());
        assert!("indigo".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(HexColor::new(0xc7, 0xd2, 0xfe).to_string(), "#C7D2FE");
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&HexColor::new(0xE0, 0xE7, 0xFF)).unwrap();
        assert_eq!(json, "\"#E0E7FF\"");

        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HexColor::new(0xE0, 0xE7, 0xFF));

        assert!(serde_json::from_str::<HexColor>("\"#nothex\"").is_err());
    }
}
