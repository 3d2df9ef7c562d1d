//! Scrolling for the terminal grid
//!
//! Rows leaving the top of the full screen enter scrollback together with
//! their wrapped flag and rendition. Once scrollback is full the oldest line
//! is overwritten in place, which shifts every buffer row index down by one.

use crate::cell::Cell;
use crate::grid::{Grid, LineRendition};

impl Grid {
    /// Scroll the whole screen up by n lines, pushing the top rows into scrollback
    pub fn scroll_up(&mut self, n: usize) {
        let n = n.min(self.rows);
        if n == 0 {
            return;
        }

        if self.max_scrollback > 0 {
            for i in 0..n {
                self.push_scrollback_row(i);
            }
        }

        let cols = self.cols;
        self.cells.rotate_left(n * cols);
        self.wrapped.rotate_left(n);
        self.renditions.rotate_left(n);
        for i in (self.rows - n)..self.rows {
            self.reset_row(i);
        }
        self.touch();
    }

    fn push_scrollback_row(&mut self, row: usize) {
        let src_start = row * self.cols;
        let src_end = src_start + self.cols;
        let is_wrapped = self.wrapped.get(row).copied().unwrap_or(false);
        let rendition = self.renditions.get(row).copied().unwrap_or_default();

        if self.scrollback_lines < self.max_scrollback {
            self.scrollback_cells
                .extend_from_slice(&self.cells[src_start..src_end]);
            self.scrollback_wrapped.push(is_wrapped);
            self.scrollback_renditions.push(rendition);
            self.scrollback_lines += 1;
        } else {
            let write_idx = self.scrollback_start;
            let dst_start = write_idx * self.cols;
            let dst_end = dst_start + self.cols;

            self.scrollback_cells[dst_start..dst_end]
                .clone_from_slice(&self.cells[src_start..src_end]);
            self.scrollback_wrapped[write_idx] = is_wrapped;
            self.scrollback_renditions[write_idx] = rendition;
            self.scrollback_start = (self.scrollback_start + 1) % self.max_scrollback;
        }
    }

    /// Scroll the whole screen down by n lines (nothing enters scrollback)
    pub fn scroll_down(&mut self, n: usize) {
        let n = n.min(self.rows);
        if n == 0 {
            return;
        }

        let cols = self.cols;
        self.cells.rotate_right(n * cols);
        self.wrapped.rotate_right(n);
        self.renditions.rotate_right(n);
        for i in 0..n {
            self.reset_row(i);
        }
        self.touch();
    }

    /// Scroll up within a region. Returns `false` if parameters are invalid.
    pub fn scroll_region_up(&mut self, n: usize, top: usize, bottom: usize) -> bool {
        if top >= self.rows || bottom >= self.rows || top > bottom {
            tracing::warn!(top, bottom, rows = self.rows, "invalid scroll region up");
            return false;
        }

        if top == 0 && bottom == self.rows - 1 && self.max_scrollback > 0 {
            self.scroll_up(n);
            return true;
        }

        let n = n.min(bottom - top + 1);
        if n == 0 {
            return true;
        }
        self.rotate_region(top, bottom, n, true);
        for i in (bottom + 1 - n)..=bottom {
            self.reset_row(i);
        }
        self.touch();
        true
    }

    /// Scroll down within a region. Returns `false` if parameters are invalid.
    pub fn scroll_region_down(&mut self, n: usize, top: usize, bottom: usize) -> bool {
        if top >= self.rows || bottom >= self.rows || top > bottom {
            tracing::warn!(top, bottom, rows = self.rows, "invalid scroll region down");
            return false;
        }

        let n = n.min(bottom - top + 1);
        if n == 0 {
            return true;
        }
        self.rotate_region(top, bottom, n, false);
        for i in top..(top + n) {
            self.reset_row(i);
        }
        self.touch();
        true
    }

    /// Rotate rows `top..=bottom` by n rows, up (left) or down (right)
    pub(crate) fn rotate_region(&mut self, top: usize, bottom: usize, n: usize, up: bool) {
        let cols = self.cols;
        let cells = &mut self.cells[top * cols..(bottom + 1) * cols];
        let wrapped = &mut self.wrapped[top..=bottom];
        let renditions = &mut self.renditions[top..=bottom];
        if up {
            cells.rotate_left(n * cols);
            wrapped.rotate_left(n);
            renditions.rotate_left(n);
        } else {
            cells.rotate_right(n * cols);
            wrapped.rotate_right(n);
            renditions.rotate_right(n);
        }
    }

    /// Blank a visible row and drop its wrap flag and rendition (no mutation bump)
    pub(crate) fn reset_row(&mut self, row: usize) {
        if let Some(row_cells) = self.row_mut(row) {
            row_cells.fill(Cell::default());
        }
        if let Some(w) = self.wrapped.get_mut(row) {
            *w = false;
        }
        if let Some(r) = self.renditions.get_mut(row) {
            *r = LineRendition::SingleWidth;
        }
    }
}
