//! Selection state, kept in screen coordinates

use crate::point::Point;

/// An active selection from `anchor` (where it started) to `end` (where it
/// was last extended to). Either may come first in buffer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started
    pub anchor: Point,
    /// Where the selection currently ends (inclusive)
    pub end: Point,
}

impl Selection {
    pub fn new(anchor: Point, end: Point) -> Self {
        Self { anchor, end }
    }

    /// A selection covering the single cell at `anchor`
    pub fn at(anchor: Point) -> Self {
        Self::new(anchor, anchor)
    }

    /// Start and end in row-major order
    pub fn normalized(&self) -> (Point, Point) {
        if self.anchor <= self.end {
            (self.anchor, self.end)
        } else {
            (self.end, self.anchor)
        }
    }

    /// Whether a screen position falls inside the selection
    pub fn contains(&self, point: Point) -> bool {
        let (start, end) = self.normalized();
        point >= start && point <= end
    }
}
