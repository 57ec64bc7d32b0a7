use crate::Span;
use pretty_assertions::assert_eq;

#[test]
fn new_and_accessors() {
    let span = Span::new(2, 7);
    assert_eq!(span.start, 2);
    assert_eq!(span.end, 7);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
}

#[test]
fn point_is_empty() {
    let span = Span::point(4);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
    assert_eq!(span.start, span.end);
}

#[test]
fn extend_to_grows_end_only() {
    let span = Span::new(3, 5);
    assert_eq!(span.extend_to(9), Span::new(3, 9));
    // Shrinking is ignored.
    assert_eq!(span.extend_to(4), Span::new(3, 5));
}

#[test]
fn range_conversion() {
    let span = Span::new(1, 4);
    assert_eq!(span.range(), 1..4);
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", Span::new(12, 17)), "12..17");
}
