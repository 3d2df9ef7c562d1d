//! Line/character editing and erase operations for the terminal grid
//!
//! Every operation here changes buffer text, so each one that actually does
//! something bumps the mutation counter exactly once.

use crate::cell::Cell;
use crate::grid::Grid;

impl Grid {
    /// Insert n blank lines at row, pushing lines below down within the scroll region
    pub fn insert_lines(&mut self, n: usize, row: usize, scroll_bottom: usize) {
        let bottom = scroll_bottom.min(self.rows - 1);
        if row > bottom {
            return;
        }
        let n = n.min(bottom - row + 1);
        if n == 0 {
            return;
        }
        self.rotate_region(row, bottom, n, false);
        for i in row..row + n {
            self.reset_row(i);
        }
        self.touch();
    }

    /// Delete n lines at row, pulling lines below up within the scroll region
    pub fn delete_lines(&mut self, n: usize, row: usize, scroll_bottom: usize) {
        let bottom = scroll_bottom.min(self.rows - 1);
        if row > bottom {
            return;
        }
        let n = n.min(bottom - row + 1);
        if n == 0 {
            return;
        }
        self.rotate_region(row, bottom, n, true);
        for i in (bottom + 1 - n)..=bottom {
            self.reset_row(i);
        }
        self.touch();
    }

    /// Insert n blank characters at position, shifting the rest of the row right
    pub fn insert_chars(&mut self, col: usize, row: usize, n: usize) {
        if row >= self.rows || col >= self.cols || n == 0 {
            return;
        }
        let n = n.min(self.cols - col);
        if let Some(row_cells) = self.row_mut(row) {
            let tail = &mut row_cells[col..];
            tail.rotate_right(n);
            tail[..n].fill(Cell::default());
        }
        self.touch();
    }

    /// Delete n characters at position, shifting the rest of the row left
    pub fn delete_chars(&mut self, col: usize, row: usize, n: usize) {
        if row >= self.rows || col >= self.cols || n == 0 {
            return;
        }
        let n = n.min(self.cols - col);
        if let Some(row_cells) = self.row_mut(row) {
            let tail = &mut row_cells[col..];
            tail.rotate_left(n);
            let len = tail.len();
            tail[len - n..].fill(Cell::default());
        }
        self.touch();
    }

    /// Erase n characters at (col, row) without shifting
    pub fn erase_chars(&mut self, col: usize, row: usize, n: usize) {
        if row >= self.rows || col >= self.cols || n == 0 {
            return;
        }
        let end = col.saturating_add(n).min(self.cols);
        if let Some(row_cells) = self.row_mut(row) {
            row_cells[col..end].fill(Cell::default());
        }
        self.touch();
    }

    /// Clear from col to end of line
    pub fn clear_line_right(&mut self, col: usize, row: usize) {
        self.erase_chars(col, row, self.cols);
    }

    /// Clear a specific row
    pub fn clear_row(&mut self, row: usize) {
        if row < self.rows {
            self.reset_row(row);
            self.touch();
        }
    }

    /// Clear the entire visible area
    pub fn clear(&mut self) {
        for row in 0..self.rows {
            self.reset_row(row);
        }
        self.touch();
    }

    /// Clear the scrollback buffer
    pub fn clear_scrollback(&mut self) {
        if self.scrollback_lines == 0 {
            return;
        }
        self.scrollback_cells.clear();
        self.scrollback_wrapped.clear();
        self.scrollback_renditions.clear();
        self.scrollback_start = 0;
        self.scrollback_lines = 0;
        self.touch();
    }
}
