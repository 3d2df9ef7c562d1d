//! Literal text search over the whole buffer
//!
//! The buffer is scanned as logical lines: runs of rows joined while a row is
//! marked soft-wrapped, so an occurrence split by auto-wrap is still found.

use regex::RegexBuilder;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::point::{Point, PointSpan};

/// One drawn glyph of a logical line and where its text starts
struct Glyph {
    byte_start: usize,
    point: Point,
    width: usize,
}

/// Text of consecutive wrapped rows with a byte offset -> cell map
#[derive(Default)]
struct LogicalLine {
    text: String,
    glyphs: Vec<Glyph>,
}

impl LogicalLine {
    fn clear(&mut self) {
        self.text.clear();
        self.glyphs.clear();
    }

    fn push_row(&mut self, cells: &[Cell], y: usize, trim_trailing_blanks: bool) {
        let len = if trim_trailing_blanks {
            cells
                .iter()
                .rposition(|cell| !cell.is_blank())
                .map_or(0, |i| i + 1)
        } else {
            cells.len()
        };

        for (x, cell) in cells[..len].iter().enumerate() {
            if cell.flags.is_placeholder() {
                continue;
            }
            self.glyphs.push(Glyph {
                byte_start: self.text.len(),
                point: Point::new(x, y),
                width: cell.width(),
            });
            cell.push_text(&mut self.text);
        }
    }

    /// Map a non-empty byte range of `text` onto the cells it covers
    fn span(&self, start: usize, end: usize) -> PointSpan {
        let first = self
            .glyphs
            .partition_point(|g| g.byte_start <= start)
            .saturating_sub(1);
        let last = self
            .glyphs
            .partition_point(|g| g.byte_start < end)
            .saturating_sub(1);

        let first = &self.glyphs[first];
        let last = &self.glyphs[last];
        PointSpan::new(
            first.point,
            Point::new(last.point.x + last.width.max(1) - 1, last.point.y),
        )
    }
}

impl Grid {
    /// Find every occurrence of `needle` in scrollback and on screen.
    ///
    /// Matching is literal; `case_insensitive` applies Unicode simple case
    /// folding. Results are non-overlapping, in buffer coordinates with
    /// inclusive ends, ascending by start. An empty needle matches nothing.
    pub fn search_text(&self, needle: &str, case_insensitive: bool) -> Vec<PointSpan> {
        if needle.is_empty() {
            return Vec::new();
        }

        let pattern = match RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(case_insensitive)
            .build()
        {
            Ok(pattern) => pattern,
            Err(err) => {
                tracing::warn!(%err, "search term rejected");
                return Vec::new();
            }
        };

        let total = self.total_rows();
        let mut results = Vec::new();
        let mut line = LogicalLine::default();
        let mut y = 0;

        while y < total {
            line.clear();
            loop {
                let last_row_of_line = !self.is_buffer_row_wrapped(y) || y + 1 == total;
                if let Some(cells) = self.buffer_row(y) {
                    line.push_row(cells, y, last_row_of_line);
                }
                y += 1;
                if last_row_of_line {
                    break;
                }
            }

            results.extend(
                pattern
                    .find_iter(&line.text)
                    .filter(|m| !m.is_empty())
                    .map(|m| line.span(m.start(), m.end())),
            );
        }

        results
    }
}
