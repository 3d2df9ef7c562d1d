//! Cell positions and inclusive spans
//!
//! The same `Point` type is used for two coordinate spaces:
//! - **Buffer** coordinates: `y` is the absolute row (0 = oldest scrollback row,
//!   visible rows follow), `x` is the cell column in the logical row.
//! - **Screen** coordinates: `y` is the same row, `x` is the rendered column,
//!   which is doubled on double-width rows.
//!
//! Converting between the two is the job of [`crate::grid::Grid::buffer_to_screen`]
//! and [`crate::grid::Grid::screen_to_buffer`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell position, ordered row-major (`y` first, then `x`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One occurrence of a search term in buffer coordinates.
///
/// `end` is inclusive: it names the last cell covered by the match, including
/// the trailing half of a wide glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointSpan {
    /// First cell of the match
    pub start: Point,
    /// Last cell of the match (inclusive)
    pub end: Point,
}

impl PointSpan {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether `point` lies inside this span (row-major, inclusive on both ends)
    pub fn contains(&self, point: Point) -> bool {
        point >= self.start && point <= self.end
    }
}
