//! Terminal grid implementation
//!
//! A 2D grid of cells backed by a circular scrollback buffer. Besides cell
//! storage the grid tracks, per row, whether the row soft-wraps into the next
//! one and which [`LineRendition`] it is drawn with, and it keeps a mutation
//! counter that every content- or layout-changing operation bumps.
//!
//! Rows are addressed two ways:
//! - *screen rows* `0..rows` index the visible area;
//! - *buffer rows* `0..total_rows()` index scrollback (oldest first) followed
//!   by the visible area. Buffer coordinates ([`Point`]) use buffer rows.

use crate::cell::{Cell, TextAttribute};
use crate::point::Point;

mod edit;
mod export;
mod rendition;
mod scroll;
mod search;

pub use rendition::LineRendition;

/// A 2D grid of terminal cells
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of columns
    pub(crate) cols: usize,
    /// Number of rows
    pub(crate) rows: usize,
    /// The actual grid data (row-major order)
    pub(crate) cells: Vec<Cell>,
    /// Scrollback buffer (flat Vec, row-major order like main grid)
    pub(crate) scrollback_cells: Vec<Cell>,
    /// Index of oldest line in circular scrollback buffer
    pub(crate) scrollback_start: usize,
    /// Number of lines currently in scrollback
    pub(crate) scrollback_lines: usize,
    /// Maximum scrollback lines
    pub(crate) max_scrollback: usize,
    /// Track which lines are wrapped
    pub(crate) wrapped: Vec<bool>,
    /// Track wrapped state for scrollback lines (physical index)
    pub(crate) scrollback_wrapped: Vec<bool>,
    /// Line rendition of each visible row
    pub(crate) renditions: Vec<LineRendition>,
    /// Line rendition of each scrollback line (physical index)
    pub(crate) scrollback_renditions: Vec<LineRendition>,
    /// Bumped by every operation that changes text or layout
    pub(crate) mutation_count: u64,
}

impl Grid {
    /// Create a new grid with the specified dimensions
    pub fn new(cols: usize, rows: usize, max_scrollback: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
            scrollback_cells: Vec::new(),
            scrollback_start: 0,
            scrollback_lines: 0,
            max_scrollback,
            wrapped: vec![false; rows],
            scrollback_wrapped: Vec::new(),
            renditions: vec![LineRendition::default(); rows],
            scrollback_renditions: Vec::new(),
            mutation_count: 0,
        }
    }

    /// Get the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Monotonic counter of content- and layout-changing operations.
    ///
    /// Recoloring through [`Grid::apply_attribute`] does not count.
    pub fn mutation_count(&self) -> u64 {
        self.mutation_count
    }

    #[inline]
    pub(crate) fn touch(&mut self) {
        self.mutation_count = self.mutation_count.wrapping_add(1);
    }

    /// Get a reference to a cell at (col, row)
    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.cols && row < self.rows {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set a cell at (col, row)
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if let Some(c) = self.get_mut(col, row) {
            *c = cell;
            self.touch();
        }
    }

    /// Get a row as a slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut [Cell]> {
        if row < self.rows {
            let start = row * self.cols;
            let end = start + self.cols;
            Some(&mut self.cells[start..end])
        } else {
            None
        }
    }

    /// Get total number of lines currently in scrollback
    pub fn scrollback_len(&self) -> usize {
        self.scrollback_lines
    }

    /// Get maximum scrollback capacity
    pub fn max_scrollback(&self) -> usize {
        self.max_scrollback
    }

    /// Scrollback lines followed by visible rows
    pub fn total_rows(&self) -> usize {
        self.scrollback_lines + self.rows
    }

    /// Check if a visible line is wrapped
    pub fn is_line_wrapped(&self, row: usize) -> bool {
        self.wrapped.get(row).copied().unwrap_or(false)
    }

    /// Set wrapped state for a visible line
    pub fn set_line_wrapped(&mut self, row: usize, wrapped: bool) {
        if let Some(w) = self.wrapped.get_mut(row) {
            if *w != wrapped {
                *w = wrapped;
                self.touch();
            }
        }
    }

    /// Rendition of a visible line
    pub fn line_rendition(&self, row: usize) -> LineRendition {
        self.renditions.get(row).copied().unwrap_or_default()
    }

    /// Change the rendition of a visible line.
    ///
    /// This changes how buffer columns map to screen columns, so it counts as
    /// a mutation.
    pub fn set_line_rendition(&mut self, row: usize, rendition: LineRendition) {
        if let Some(r) = self.renditions.get_mut(row) {
            if *r != rendition {
                *r = rendition;
                self.touch();
            }
        }
    }

    #[inline]
    fn physical_scrollback_index(&self, index: usize) -> usize {
        (self.scrollback_start + index) % self.max_scrollback
    }

    /// Get a line from scrollback by index (0 = oldest)
    pub fn scrollback_line(&self, index: usize) -> Option<&[Cell]> {
        if index < self.scrollback_lines {
            let start = self.physical_scrollback_index(index) * self.cols;
            Some(&self.scrollback_cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Check if a scrollback line is wrapped
    pub fn is_scrollback_wrapped(&self, index: usize) -> bool {
        if index < self.scrollback_lines {
            let physical = self.physical_scrollback_index(index);
            self.scrollback_wrapped
                .get(physical)
                .copied()
                .unwrap_or(false)
        } else {
            false
        }
    }

    /// Get a row by buffer index (scrollback first, then the visible area)
    pub fn buffer_row(&self, y: usize) -> Option<&[Cell]> {
        if y < self.scrollback_lines {
            self.scrollback_line(y)
        } else {
            self.row(y - self.scrollback_lines)
        }
    }

    fn buffer_row_mut(&mut self, y: usize) -> Option<&mut [Cell]> {
        if y < self.scrollback_lines {
            let start = self.physical_scrollback_index(y) * self.cols;
            let end = start + self.cols;
            Some(&mut self.scrollback_cells[start..end])
        } else {
            self.row_mut(y - self.scrollback_lines)
        }
    }

    /// Whether the buffer row soft-wraps into the next one
    pub fn is_buffer_row_wrapped(&self, y: usize) -> bool {
        if y < self.scrollback_lines {
            self.is_scrollback_wrapped(y)
        } else {
            self.is_line_wrapped(y - self.scrollback_lines)
        }
    }

    /// Rendition of a buffer row; rows outside the buffer are single width
    pub fn buffer_row_rendition(&self, y: usize) -> LineRendition {
        if y < self.scrollback_lines {
            let physical = self.physical_scrollback_index(y);
            self.scrollback_renditions
                .get(physical)
                .copied()
                .unwrap_or_default()
        } else {
            self.line_rendition(y - self.scrollback_lines)
        }
    }

    /// Buffer row index of a visible row
    pub fn screen_row_to_buffer_row(&self, row: usize) -> usize {
        self.scrollback_lines + row
    }

    /// Cell at a buffer position
    pub fn cell_at(&self, point: Point) -> Option<&Cell> {
        self.buffer_row(point.y).and_then(|row| row.get(point.x))
    }

    /// Paint `attr` over the inclusive buffer span `start..=end`.
    ///
    /// Only the attribute of each cell changes; text and layout are untouched,
    /// so the mutation counter is not bumped.
    pub fn apply_attribute(&mut self, start: Point, end: Point, attr: TextAttribute) {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        let last_row = end.y.min(self.total_rows().saturating_sub(1));
        let cols = self.cols;
        for y in start.y..=last_row {
            let first_col = if y == start.y { start.x } else { 0 };
            let last_col = if y == end.y { end.x } else { cols - 1 };
            if let Some(row) = self.buffer_row_mut(y) {
                for cell in row
                    .iter_mut()
                    .take(last_col.saturating_add(1))
                    .skip(first_col)
                {
                    cell.attr = attr;
                }
            }
        }
    }
}
