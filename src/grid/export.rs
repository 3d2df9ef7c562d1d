//! Plain-text export of the terminal grid

use crate::cell::Cell;
use crate::grid::Grid;

impl Grid {
    /// Get the text content of a visible row (wide-char spacers skipped)
    pub fn row_text(&self, row: usize) -> String {
        self.row(row).map(cells_to_text).unwrap_or_default()
    }

    /// Get the text content of a buffer row (wide-char spacers skipped)
    pub fn buffer_row_text(&self, y: usize) -> String {
        self.buffer_row(y).map(cells_to_text).unwrap_or_default()
    }

    /// Export the entire buffer (scrollback + visible) as plain text.
    ///
    /// Soft-wrapped rows are joined with the row that follows them; every
    /// other row ends with a newline after its trailing blanks are trimmed.
    /// Trailing empty rows of the screen are dropped.
    pub fn export_text(&self) -> String {
        let mut result = String::new();
        let mut pending_newlines = 0;

        for y in 0..self.total_rows() {
            let text = self.buffer_row_text(y);
            let wrapped = self.is_buffer_row_wrapped(y);
            let text = if wrapped { text.as_str() } else { text.trim_end() };

            if !text.is_empty() {
                result.extend(std::iter::repeat_n('\n', pending_newlines));
                pending_newlines = 0;
                result.push_str(text);
            }
            if !wrapped {
                pending_newlines += 1;
            }
        }

        if !result.is_empty() {
            result.push('\n');
        }
        result
    }
}

fn cells_to_text(cells: &[Cell]) -> String {
    let mut text = String::with_capacity(cells.len());
    for cell in cells.iter().filter(|c| !c.flags.is_placeholder()) {
        cell.push_text(&mut text);
    }
    text
}
