//! Character writing logic
//!
//! Text is split into extended grapheme clusters; each cluster occupies one
//! cell (two for wide clusters, the second being a spacer). Zero-width
//! clusters attach to the previous cell. Wrapping is deferred: writing the
//! last column arms `pending_wrap`, and the next printable cluster marks the
//! row as soft-wrapped before moving to the next line.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::cell::{Cell, CellFlags};
use crate::terminal::TerminalState;

const TAB_WIDTH: usize = 8;

impl TerminalState {
    pub(crate) fn write_str(&mut self, text: &str) {
        for grapheme in text.graphemes(true) {
            match grapheme {
                "\n" | "\r\n" => self.new_line(),
                "\r" => {
                    self.cursor.col = 0;
                    self.cursor.pending_wrap = false;
                }
                "\t" => self.tab(),
                g if g.chars().all(char::is_control) => {}
                g => self.print(g),
            }
        }
    }

    fn print(&mut self, grapheme: &str) {
        let cols = self.grid.cols();
        let mut width = UnicodeWidthStr::width(grapheme).min(2);
        if width == 0 {
            self.attach_to_previous(grapheme);
            return;
        }
        if cols < 2 {
            width = 1;
        }

        if self.cursor.pending_wrap {
            self.wrap_line();
        }
        if width == 2 && self.cursor.col + 2 > cols {
            let mut padding = Cell::with_attr(' ', self.attr);
            padding.flags = CellFlags::WIDE_CHAR_PADDING;
            self.grid.set(self.cursor.col, self.cursor.row, padding);
            self.wrap_line();
        }

        let mut chars = grapheme.chars();
        let base = chars.next().unwrap_or(' ');
        let mut cell = Cell::with_attr(base, self.attr);
        cell.combining.extend(chars);

        let (col, row) = (self.cursor.col, self.cursor.row);
        if width == 2 {
            cell.flags = CellFlags::WIDE_CHAR;
            let mut spacer = Cell::with_attr(' ', self.attr);
            spacer.flags = CellFlags::WIDE_CHAR_SPACER;
            self.grid.set(col, row, cell);
            self.grid.set(col + 1, row, spacer);
        } else {
            self.grid.set(col, row, cell);
        }

        let next = col + width;
        if next >= cols {
            self.cursor.col = cols - 1;
            self.cursor.pending_wrap = true;
        } else {
            self.cursor.col = next;
        }
    }

    /// Zero-width cluster: append to the cell the cursor just wrote
    fn attach_to_previous(&mut self, grapheme: &str) {
        let (mut col, row) = (self.cursor.col, self.cursor.row);
        if !self.cursor.pending_wrap {
            if col == 0 {
                return;
            }
            col -= 1;
        }
        if col > 0
            && self
                .grid
                .get(col, row)
                .is_some_and(|cell| cell.flags.wide_char_spacer())
        {
            col -= 1;
        }
        if let Some(cell) = self.grid.get_mut(col, row) {
            cell.combining.extend(grapheme.chars());
            self.grid.touch();
        }
    }

    fn tab(&mut self) {
        if self.cursor.pending_wrap {
            return;
        }
        let last_col = self.grid.cols() - 1;
        self.cursor.col = ((self.cursor.col / TAB_WIDTH + 1) * TAB_WIDTH).min(last_col);
    }

    fn wrap_line(&mut self) {
        self.grid.set_line_wrapped(self.cursor.row, true);
        self.new_line();
    }

    fn new_line(&mut self) {
        self.cursor.col = 0;
        self.cursor.pending_wrap = false;
        if self.cursor.row + 1 >= self.grid.rows() {
            self.grid.scroll_up(1);
        } else {
            self.cursor.row += 1;
        }
    }
}
