//! Search sessions over a live terminal buffer
//!
//! A [`Search`] captures every occurrence of a term once, at construction, and
//! then cycles through them on each [`Search::select_next`]. The buffer keeps
//! changing underneath (new output, scrollback eviction, edits); the session
//! never locks it. Instead it remembers the buffer's mutation counter and
//! reports itself stale once that counter moves, at which point the caller
//! builds a new session.
//!
//! ```
//! use std::sync::Arc;
//! use scrollback_search::search::Search;
//! use scrollback_search::terminal::Terminal;
//!
//! let term = Arc::new(Terminal::new(20, 4, 100));
//! term.write("one fish\ntwo fish\n");
//!
//! let mut search = Search::new(&term, "fish", false, true);
//! assert_eq!(search.len(), 2);
//! assert!(search.select_next());
//! assert_eq!(search.current_index(), Some(0));
//!
//! term.write("red fish");
//! assert!(search.is_stale());
//! ```

use std::sync::{Arc, Weak};

use crate::cell::TextAttribute;
use crate::point::PointSpan;
use crate::render_data::RenderData;

/// One search: a fixed result set, a direction and a cursor into the results
#[derive(Debug, Clone)]
pub struct Search {
    render_data: Option<Weak<dyn RenderData>>,
    results: Vec<PointSpan>,
    /// +1 forward, -1 backward
    step: isize,
    /// Sits one step before the first hit until the first advance, so it may
    /// be -1 or `results.len()` at that point
    index: isize,
    started: bool,
    mutation_count: u64,
    needle: String,
    case_insensitive: bool,
}

impl Default for Search {
    /// An unbound session: no results, always stale
    fn default() -> Self {
        Self {
            render_data: None,
            results: Vec::new(),
            step: 1,
            index: 0,
            started: false,
            mutation_count: 0,
            needle: String::new(),
            case_insensitive: false,
        }
    }
}

impl Search {
    /// Search `render_data` for `needle`.
    ///
    /// With an active selection the first hit is the nearest match strictly
    /// past the selection anchor in the search direction (a match starting
    /// exactly at the anchor is skipped); otherwise it is the first match
    /// (forward) or the last one (`reverse`).
    pub fn new<R>(
        render_data: &Arc<R>,
        needle: &str,
        reverse: bool,
        case_insensitive: bool,
    ) -> Self
    where
        R: RenderData + 'static,
    {
        let weak: Weak<R> = Arc::downgrade(render_data);
        let weak: Weak<dyn RenderData> = weak;
        Self::build(weak, render_data.as_ref(), needle, reverse, case_insensitive)
    }

    fn build(
        weak: Weak<dyn RenderData>,
        render_data: &dyn RenderData,
        needle: &str,
        reverse: bool,
        case_insensitive: bool,
    ) -> Self {
        let step: isize = if reverse { -1 } else { 1 };

        // Counter first: a write that lands during the scan must read as stale
        let mutation_count = render_data.mutation_count();
        let results = render_data.search_text(needle, case_insensitive);

        let mut search = Self {
            render_data: Some(weak),
            results,
            step,
            index: 0,
            started: false,
            mutation_count,
            needle: needle.to_string(),
            case_insensitive,
        };

        if search.results.is_empty() {
            tracing::debug!(needle, reverse, case_insensitive, "search found no matches");
            return search;
        }

        let highest_index = search.results.len() as isize - 1;
        let mut first_index = if reverse { highest_index } else { 0 };

        if render_data.is_selection_active() {
            let anchor = render_data.screen_to_buffer(render_data.selection_anchor());
            if reverse {
                while first_index >= 0 && search.results[first_index as usize].start >= anchor {
                    first_index -= 1;
                }
            } else {
                while first_index <= highest_index
                    && search.results[first_index as usize].start <= anchor
                {
                    first_index += 1;
                }
            }
        }

        search.index = first_index - step;
        tracing::debug!(
            needle,
            reverse,
            case_insensitive,
            matches = search.results.len(),
            first_index,
            "search started"
        );
        search
    }

    /// Whether the results may no longer describe the buffer.
    ///
    /// True once the terminal has been dropped or its mutation counter has
    /// moved since this session was built. A stale session should be replaced,
    /// not advanced.
    pub fn is_stale(&self) -> bool {
        match self.upgrade() {
            Some(render_data) => render_data.mutation_count() != self.mutation_count,
            None => true,
        }
    }

    /// Move to the next occurrence in search order and select it.
    ///
    /// Wraps around at either end. Returns `false` without changing anything
    /// when there are no results or the terminal is gone.
    pub fn select_next(&mut self) -> bool {
        if self.results.is_empty() {
            return false;
        }
        let Some(render_data) = self.upgrade() else {
            return false;
        };

        let count = self.results.len() as isize;
        self.index = (self.index + self.step).rem_euclid(count);
        self.started = true;

        let span = self.results[self.index as usize];
        let start = render_data.buffer_to_screen(span.start);
        let end = render_data.buffer_to_screen(span.end);
        tracing::trace!(index = self.index, %start, %end, "search selected match");
        render_data.select_new_region(start, end);
        true
    }

    /// Paint `attr` over every occurrence, in buffer order.
    ///
    /// Does not move the cursor and does not check staleness.
    pub fn color_all(&self, attr: &TextAttribute) {
        let Some(render_data) = self.upgrade() else {
            return;
        };
        for span in &self.results {
            render_data.color_selection(span.start, span.end, *attr);
        }
    }

    /// Rebuild the session if it is stale or was built for a different query.
    ///
    /// Returns `true` when `self` was replaced.
    pub fn reset_if_stale<R>(
        &mut self,
        render_data: &Arc<R>,
        needle: &str,
        reverse: bool,
        case_insensitive: bool,
    ) -> bool
    where
        R: RenderData + 'static,
    {
        let same_target = self.upgrade().is_some_and(|current| {
            let current = Arc::as_ptr(&current) as *const ();
            std::ptr::eq(current, Arc::as_ptr(render_data) as *const ())
        });

        if same_target
            && !self.is_stale()
            && self.matches_query(needle, reverse, case_insensitive)
        {
            return false;
        }
        *self = Search::new(render_data, needle, reverse, case_insensitive);
        true
    }

    /// Whether this session was built for exactly this query
    pub fn matches_query(&self, needle: &str, reverse: bool, case_insensitive: bool) -> bool {
        self.needle == needle
            && self.is_reverse() == reverse
            && self.case_insensitive == case_insensitive
    }

    /// All occurrences, ascending by start regardless of direction
    pub fn results(&self) -> &[PointSpan] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Index of the selected occurrence, `None` before the first advance
    pub fn current_index(&self) -> Option<usize> {
        if self.started {
            Some(self.index as usize)
        } else {
            None
        }
    }

    /// The selected occurrence, `None` before the first advance
    pub fn current(&self) -> Option<PointSpan> {
        self.current_index().map(|i| self.results[i])
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_reverse(&self) -> bool {
        self.step < 0
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    fn upgrade(&self) -> Option<Arc<dyn RenderData>> {
        self.render_data.as_ref().and_then(Weak::upgrade)
    }
}
