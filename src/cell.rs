//! Terminal cells and text attributes

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::{Color, NamedColor};

bitflags! {
    /// Visual attribute flags applied to a cell
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AttributeFlags: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

bitflags! {
    /// Layout flags describing how a cell participates in a glyph
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// First cell of a double-width glyph
        const WIDE_CHAR = 1 << 0;
        /// Second (placeholder) cell of a double-width glyph
        const WIDE_CHAR_SPACER = 1 << 1;
        /// Last column left empty because the next wide glyph wrapped
        const WIDE_CHAR_PADDING = 1 << 2;
    }
}

impl CellFlags {
    #[inline]
    pub fn wide_char(&self) -> bool {
        self.contains(CellFlags::WIDE_CHAR)
    }

    #[inline]
    pub fn wide_char_spacer(&self) -> bool {
        self.contains(CellFlags::WIDE_CHAR_SPACER)
    }

    #[inline]
    pub fn wide_char_padding(&self) -> bool {
        self.contains(CellFlags::WIDE_CHAR_PADDING)
    }

    /// Cell holds no text of its own (spacer or wrap padding)
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.intersects(CellFlags::WIDE_CHAR_SPACER | CellFlags::WIDE_CHAR_PADDING)
    }
}

/// Colors and flags a range of cells is drawn with.
///
/// This is the value search highlighting paints onto matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextAttribute {
    pub fg: Color,
    pub bg: Color,
    pub flags: AttributeFlags,
}

impl Default for TextAttribute {
    fn default() -> Self {
        Self {
            fg: Color::Named(NamedColor::White),
            bg: Color::Named(NamedColor::Black),
            flags: AttributeFlags::empty(),
        }
    }
}

impl TextAttribute {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            flags: AttributeFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: AttributeFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Base character
    pub c: char,
    /// Zero-width characters rendered on top of `c` (combining marks, ZWJ tails)
    pub combining: Vec<char>,
    pub flags: CellFlags,
    pub attr: TextAttribute,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            c: ' ',
            combining: Vec::new(),
            flags: CellFlags::empty(),
            attr: TextAttribute::default(),
        }
    }
}

impl Cell {
    pub fn new(c: char) -> Self {
        Self {
            c,
            ..Default::default()
        }
    }

    pub fn with_attr(c: char, attr: TextAttribute) -> Self {
        Self {
            c,
            attr,
            ..Default::default()
        }
    }

    /// True for a default blank that carries no text
    pub fn is_blank(&self) -> bool {
        self.c == ' ' && self.combining.is_empty() && !self.flags.wide_char_spacer()
    }

    /// Number of screen columns this cell's glyph covers
    pub fn width(&self) -> usize {
        if self.flags.wide_char() {
            2
        } else if self.flags.wide_char_spacer() {
            0
        } else {
            1
        }
    }

    /// Append the cell's text (base character plus combining characters)
    pub fn push_text(&self, out: &mut String) {
        out.push(self.c);
        out.extend(self.combining.iter());
    }

    /// The full grapheme stored in this cell
    pub fn get_grapheme(&self) -> String {
        let mut s = String::with_capacity(4);
        self.push_text(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert!(cell.is_blank());
        assert_eq!(cell.width(), 1);
        assert_eq!(cell.get_grapheme(), " ");
    }

    #[test]
    fn test_grapheme_includes_combining() {
        let mut cell = Cell::new('e');
        cell.combining.push('\u{0301}');
        assert_eq!(cell.get_grapheme(), "e\u{0301}");
        assert!(!cell.is_blank());
    }

    #[test]
    fn test_wide_widths() {
        let mut lead = Cell::new('世');
        lead.flags = CellFlags::WIDE_CHAR;
        let mut spacer = Cell::default();
        spacer.flags = CellFlags::WIDE_CHAR_SPACER;
        assert_eq!(lead.width(), 2);
        assert_eq!(spacer.width(), 0);
        assert!(!spacer.is_blank());
    }
}
