//! Property-based invariant tests for search sessions.
//!
//! These hold for any result set, direction and anchor:
//!
//! 1. `count` consecutive advances visit every match exactly once.
//! 2. Advance `count + 1` lands back on the first hit.
//! 3. The first hit is the nearest match strictly past the anchor in the
//!    search direction, wrapping when there is none.
//! 4. An empty result set never selects anything.
//! 5. Grid search agrees with a plain substring scan.
//! 6. Any printable write makes an existing session stale.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;
use scrollback_search::{Point, PointSpan, RenderData, Search, Terminal, TextAttribute};

// ── Helpers ─────────────────────────────────────────────────────────────

struct FixedResults {
    results: Vec<PointSpan>,
    anchor: Option<Point>,
    selections: Mutex<Vec<Point>>,
}

impl FixedResults {
    fn new(xs: &BTreeSet<usize>, anchor: Option<usize>) -> Arc<Self> {
        Arc::new(Self {
            results: xs
                .iter()
                .map(|&x| PointSpan::new(Point::new(x, 0), Point::new(x, 0)))
                .collect(),
            anchor: anchor.map(|x| Point::new(x, 0)),
            selections: Mutex::new(Vec::new()),
        })
    }
}

impl RenderData for FixedResults {
    fn search_text(&self, _needle: &str, _case_insensitive: bool) -> Vec<PointSpan> {
        self.results.clone()
    }

    fn mutation_count(&self) -> u64 {
        0
    }

    fn is_selection_active(&self) -> bool {
        self.anchor.is_some()
    }

    fn selection_anchor(&self) -> Point {
        self.anchor.unwrap_or_default()
    }

    fn screen_to_buffer(&self, point: Point) -> Point {
        point
    }

    fn buffer_to_screen(&self, point: Point) -> Point {
        point
    }

    fn select_new_region(&self, start: Point, _end: Point) {
        self.selections.lock().push(start);
    }

    fn color_selection(&self, _start: Point, _end: Point, _attr: TextAttribute) {}
}

fn match_set() -> impl Strategy<Value = BTreeSet<usize>> {
    proptest::collection::btree_set(0usize..200, 1..=20)
}

fn expected_first(xs: &[usize], anchor: Option<usize>, reverse: bool) -> usize {
    match (anchor, reverse) {
        (None, false) => 0,
        (None, true) => xs.len() - 1,
        (Some(a), false) => xs.iter().position(|&x| x > a).unwrap_or(0),
        (Some(a), true) => xs.iter().rposition(|&x| x < a).unwrap_or(xs.len() - 1),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Cycling and first-hit placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn advances_form_a_cycle(
        xs in match_set(),
        anchor in proptest::option::of(0usize..220),
        reverse in any::<bool>(),
    ) {
        let fake = FixedResults::new(&xs, anchor);
        let mut search = Search::new(&fake, "x", reverse, false);
        let count = search.len();
        prop_assert_eq!(count, xs.len());

        let mut visited = Vec::with_capacity(count);
        for _ in 0..count {
            prop_assert!(search.select_next());
            visited.push(search.current_index().unwrap());
        }

        let distinct: BTreeSet<_> = visited.iter().copied().collect();
        prop_assert_eq!(distinct.len(), count);
        prop_assert!(visited.iter().all(|&i| i < count));

        prop_assert!(search.select_next());
        prop_assert_eq!(search.current_index(), Some(visited[0]));
    }

    #[test]
    fn consecutive_hits_step_in_direction(
        xs in match_set(),
        reverse in any::<bool>(),
    ) {
        let fake = FixedResults::new(&xs, None);
        let mut search = Search::new(&fake, "x", reverse, false);
        let count = search.len();

        let mut previous = None;
        for _ in 0..count {
            search.select_next();
            let index = search.current_index().unwrap();
            if let Some(prev) = previous {
                let expected = if reverse { (prev + count - 1) % count } else { (prev + 1) % count };
                prop_assert_eq!(index, expected);
            }
            previous = Some(index);
        }
    }

    #[test]
    fn first_hit_is_nearest_past_anchor(
        xs in match_set(),
        anchor in proptest::option::of(0usize..220),
        reverse in any::<bool>(),
    ) {
        let fake = FixedResults::new(&xs, anchor);
        let mut search = Search::new(&fake, "x", reverse, false);
        let sorted: Vec<usize> = xs.iter().copied().collect();

        prop_assert!(search.select_next());
        let expected = expected_first(&sorted, anchor, reverse);
        prop_assert_eq!(search.current_index(), Some(expected));
        prop_assert_eq!(fake.selections.lock().last().map(|p| p.x), Some(sorted[expected]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Empty result sets
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_results_never_select(
        anchor in proptest::option::of(0usize..220),
        reverse in any::<bool>(),
        attempts in 1usize..10,
    ) {
        let fake = FixedResults::new(&BTreeSet::new(), anchor);
        let mut search = Search::new(&fake, "x", reverse, false);

        for _ in 0..attempts {
            prop_assert!(!search.select_next());
        }
        prop_assert_eq!(search.current_index(), None);
        prop_assert!(fake.selections.lock().is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Against a real terminal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_search_matches_substring_scan(text in "[ab ]{0,60}") {
        let term = Terminal::new(64, 2, 0);
        term.write(&text);

        let found: Vec<usize> = term
            .search_text("ab", false)
            .iter()
            .map(|span| span.start.x)
            .collect();
        let expected: Vec<usize> = text.match_indices("ab").map(|(i, _)| i).collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn printable_write_makes_session_stale(
        before in "[a-z ]{0,30}",
        after in "[a-z]{1,10}",
    ) {
        let term = Arc::new(Terminal::new(40, 4, 100));
        term.write(&before);
        let search = Search::new(&term, "a", false, true);
        prop_assert!(!search.is_stale());

        term.write(&after);
        prop_assert!(search.is_stale());
    }
}
