//! Terminal implementation
//!
//! [`Terminal`] bundles a [`Grid`], a cursor and a selection behind a single
//! `parking_lot::RwLock`, so one `Arc<Terminal>` can be written to by an
//! output pump while search sessions hold weak handles to it. It implements
//! [`RenderData`], which is everything a [`crate::search::Search`] needs.
//!
//! Submodules:
//! - `selection`: selection state in screen coordinates
//! - `write`: character writing logic (graphemes, wide chars, auto-wrap)

pub mod selection;
mod write;

pub use selection::Selection;

use parking_lot::RwLock;

use crate::cell::TextAttribute;
use crate::config::TerminalConfig;
use crate::grid::{Grid, LineRendition};
use crate::point::{Point, PointSpan};
use crate::render_data::RenderData;

/// Cursor position on the visible screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub col: usize,
    pub row: usize,
    /// Last column was written; the next printable character wraps first
    pub pending_wrap: bool,
}

#[derive(Debug)]
pub(crate) struct TerminalState {
    pub grid: Grid,
    pub cursor: Cursor,
    /// Attribute newly written cells get
    pub attr: TextAttribute,
    pub selection: Option<Selection>,
}

/// A thread-shareable terminal buffer with selection
#[derive(Debug)]
pub struct Terminal {
    state: RwLock<TerminalState>,
}

impl Terminal {
    /// Create a terminal with the given screen size and scrollback capacity
    pub fn new(cols: usize, rows: usize, max_scrollback: usize) -> Self {
        Self {
            state: RwLock::new(TerminalState {
                grid: Grid::new(cols, rows, max_scrollback),
                cursor: Cursor::default(),
                attr: TextAttribute::default(),
                selection: None,
            }),
        }
    }

    /// Create a terminal sized by configuration
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self::new(config.cols, config.rows, config.max_scrollback)
    }

    /// (cols, rows) of the visible screen
    pub fn size(&self) -> (usize, usize) {
        let state = self.state.read();
        (state.grid.cols(), state.grid.rows())
    }

    /// Cursor (col, row) on the visible screen
    pub fn cursor_position(&self) -> (usize, usize) {
        let state = self.state.read();
        (state.cursor.col, state.cursor.row)
    }

    /// Write text at the cursor.
    ///
    /// Handles `\n` (new line), `\r`, `\t`; other control characters are
    /// ignored. Text auto-wraps at the right margin.
    pub fn write(&self, text: &str) {
        self.state.write().write_str(text);
    }

    /// Attribute used for cells written from now on
    pub fn set_attribute(&self, attr: TextAttribute) {
        self.state.write().attr = attr;
    }

    /// Change how a visible row is drawn
    pub fn set_line_rendition(&self, row: usize, rendition: LineRendition) {
        self.state.write().grid.set_line_rendition(row, rendition);
    }

    /// Scroll the screen up, pushing rows into scrollback
    pub fn scroll_up(&self, n: usize) {
        self.state.write().grid.scroll_up(n);
    }

    /// Clear the visible screen and home the cursor
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.grid.clear();
        state.cursor = Cursor::default();
    }

    /// Drop all scrollback lines
    pub fn clear_scrollback(&self) {
        self.state.write().grid.clear_scrollback();
    }

    /// Start a selection at a screen position
    pub fn start_selection(&self, anchor: Point) {
        self.state.write().selection = Some(Selection::at(anchor));
    }

    /// Move the end of the active selection; no-op without one
    pub fn extend_selection(&self, end: Point) {
        if let Some(selection) = self.state.write().selection.as_mut() {
            selection.end = end;
        }
    }

    pub fn clear_selection(&self) {
        self.state.write().selection = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.state.read().selection
    }

    /// Attribute of the cell at a buffer position
    pub fn cell_attribute(&self, point: Point) -> Option<TextAttribute> {
        self.state.read().grid.cell_at(point).map(|cell| cell.attr)
    }

    /// Scrollback and screen as plain text
    pub fn text(&self) -> String {
        self.state.read().grid.export_text()
    }

    /// Run `f` against the grid under the read lock
    pub fn with_grid<T>(&self, f: impl FnOnce(&Grid) -> T) -> T {
        f(&self.state.read().grid)
    }
}

impl RenderData for Terminal {
    fn search_text(&self, needle: &str, case_insensitive: bool) -> Vec<PointSpan> {
        self.state.read().grid.search_text(needle, case_insensitive)
    }

    fn mutation_count(&self) -> u64 {
        self.state.read().grid.mutation_count()
    }

    fn is_selection_active(&self) -> bool {
        self.state.read().selection.is_some()
    }

    fn selection_anchor(&self) -> Point {
        self.state
            .read()
            .selection
            .map(|selection| selection.anchor)
            .unwrap_or_default()
    }

    fn screen_to_buffer(&self, point: Point) -> Point {
        self.state.read().grid.screen_to_buffer(point)
    }

    fn buffer_to_screen(&self, point: Point) -> Point {
        self.state.read().grid.buffer_to_screen(point)
    }

    fn select_new_region(&self, start: Point, end: Point) {
        self.state.write().selection = Some(Selection::new(start, end));
    }

    fn color_selection(&self, start: Point, end: Point, attr: TextAttribute) {
        self.state.write().grid.apply_attribute(start, end, attr);
    }
}

#[cfg(test)]
mod tests;
