//! Terminal colors
//!
//! Colors serialize as strings so configuration files stay readable:
//! `"yellow"` / `"bright_blue"` for the 16 named colors, `"208"` for a
//! 256-color palette index and `"#ff8800"` for true color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The 16 standard ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];

    /// Configuration name of the color (snake_case)
    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::BrightBlack => "bright_black",
            NamedColor::BrightRed => "bright_red",
            NamedColor::BrightGreen => "bright_green",
            NamedColor::BrightYellow => "bright_yellow",
            NamedColor::BrightBlue => "bright_blue",
            NamedColor::BrightMagenta => "bright_magenta",
            NamedColor::BrightCyan => "bright_cyan",
            NamedColor::BrightWhite => "bright_white",
        }
    }

    /// Look up a named color by its configuration name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// A cell foreground or background color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// One of the 16 ANSI colors
    Named(NamedColor),
    /// 256-color palette index
    Indexed(u8),
    /// 24-bit true color
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Indexed(idx) => write!(f, "{}", idx),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(Error::InvalidColor(s.to_string()));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
            };
            return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }
        if let Ok(idx) = s.parse::<u8>() {
            return Ok(Color::Indexed(idx));
        }
        NamedColor::from_name(s)
            .map(Color::Named)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
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
    fn test_parse_named_indexed_and_rgb() {
        assert_eq!(
            "bright_blue".parse::<Color>().unwrap(),
            Color::Named(NamedColor::BrightBlue)
        );
        assert_eq!(
            "Yellow".parse::<Color>().unwrap(),
            Color::Named(NamedColor::Yellow)
        );
        assert_eq!("208".parse::<Color>().unwrap(), Color::Indexed(208));
        assert_eq!(
            "#ff8800".parse::<Color>().unwrap(),
            Color::Rgb(0xff, 0x88, 0x00)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("mauve".parse::<Color>().is_err());
        assert!("#ff88".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("256".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for color in [
            Color::Named(NamedColor::BrightCyan),
            Color::Indexed(17),
            Color::Rgb(1, 2, 3),
        ] {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }
}
