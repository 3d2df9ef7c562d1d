//! The capability set a search session needs from the terminal it searches
//!
//! A [`crate::search::Search`] never owns the terminal. It holds a weak handle
//! to something implementing [`RenderData`] and calls back into it to scan
//! text, read the mutation counter, translate coordinates and apply
//! selections and highlights. [`crate::terminal::Terminal`] is the in-crate
//! implementation; UI layers can provide their own.
//!
//! Every method takes `&self`: implementors are shared (`Arc`) with whatever
//! writes to the buffer and are expected to use interior locking.

use crate::cell::TextAttribute;
use crate::point::{Point, PointSpan};

/// Buffer, coordinate and selection access for search
pub trait RenderData: Send + Sync {
    /// All occurrences of `needle` in buffer coordinates, ascending by start
    fn search_text(&self, needle: &str, case_insensitive: bool) -> Vec<PointSpan>;

    /// Monotonic counter bumped by every content-changing buffer operation
    fn mutation_count(&self) -> u64;

    /// Whether a selection is currently active
    fn is_selection_active(&self) -> bool;

    /// Screen position the active selection started from
    fn selection_anchor(&self) -> Point;

    /// Translate a screen position into buffer coordinates
    fn screen_to_buffer(&self, point: Point) -> Point;

    /// Translate a buffer position into screen coordinates
    fn buffer_to_screen(&self, point: Point) -> Point;

    /// Replace the active selection with the screen range `start..=end`
    fn select_new_region(&self, start: Point, end: Point);

    /// Paint `attr` over the buffer range `start..=end` without touching the selection
    fn color_selection(&self, start: Point, end: Point, attr: TextAttribute);
}
