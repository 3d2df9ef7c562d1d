//! Line renditions and buffer <-> screen coordinate translation

use crate::grid::Grid;
use crate::point::Point;

/// How a row is drawn (DECSWL / DECDWL / DECDHL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineRendition {
    #[default]
    SingleWidth,
    DoubleWidth,
    DoubleHeightTop,
    DoubleHeightBottom,
}

impl LineRendition {
    /// Every rendition other than single width draws each cell two columns wide
    #[inline]
    pub fn is_double_width(&self) -> bool {
        !matches!(self, LineRendition::SingleWidth)
    }
}

impl Grid {
    /// Translate a buffer position into the column it is drawn at
    pub fn buffer_to_screen(&self, point: Point) -> Point {
        if self.buffer_row_rendition(point.y).is_double_width() {
            Point::new(point.x.saturating_mul(2), point.y)
        } else {
            point
        }
    }

    /// Translate a drawn column back into its buffer position
    pub fn screen_to_buffer(&self, point: Point) -> Point {
        if self.buffer_row_rendition(point.y).is_double_width() {
            Point::new(point.x / 2, point.y)
        } else {
            point
        }
    }
}
