// Selection tests
use crate::point::Point;
use crate::render_data::RenderData;
use crate::terminal::*;

#[test]
fn test_start_and_extend_selection() {
    let term = Terminal::new(80, 24, 100);
    term.start_selection(Point::new(10, 2));
    assert_eq!(term.selection(), Some(Selection::at(Point::new(10, 2))));

    term.extend_selection(Point::new(3, 1));
    let selection = term.selection().unwrap();
    assert_eq!(selection.anchor, Point::new(10, 2));
    assert_eq!(selection.end, Point::new(3, 1));
    assert_eq!(
        selection.normalized(),
        (Point::new(3, 1), Point::new(10, 2))
    );
}

#[test]
fn test_extend_without_selection_is_noop() {
    let term = Terminal::new(80, 24, 100);
    term.extend_selection(Point::new(5, 5));
    assert!(term.selection().is_none());
    assert!(!term.is_selection_active());
}

#[test]
fn test_clear_selection() {
    let term = Terminal::new(80, 24, 100);
    term.start_selection(Point::new(1, 1));
    assert!(term.is_selection_active());

    term.clear_selection();
    assert!(!term.is_selection_active());
    assert_eq!(term.selection_anchor(), Point::default());
}

#[test]
fn test_selection_anchor_is_where_it_started() {
    let term = Terminal::new(80, 24, 100);
    term.start_selection(Point::new(40, 3));
    term.extend_selection(Point::new(0, 0));
    assert_eq!(term.selection_anchor(), Point::new(40, 3));
}

#[test]
fn test_selection_contains_wraps_across_rows() {
    let selection = Selection::new(Point::new(70, 4), Point::new(5, 5));
    assert!(selection.contains(Point::new(79, 4)));
    assert!(selection.contains(Point::new(0, 5)));
    assert!(selection.contains(Point::new(5, 5)));
    assert!(!selection.contains(Point::new(6, 5)));
    assert!(!selection.contains(Point::new(69, 4)));

    let reversed = Selection::new(Point::new(5, 5), Point::new(70, 4));
    assert!(reversed.contains(Point::new(0, 5)));
}

#[test]
fn test_selection_does_not_count_as_mutation() {
    let term = Terminal::new(80, 24, 100);
    term.write("text");
    let before = term.mutation_count();

    term.start_selection(Point::new(0, 0));
    term.extend_selection(Point::new(3, 0));
    term.clear_selection();

    assert_eq!(term.mutation_count(), before);
}
