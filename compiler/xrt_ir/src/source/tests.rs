use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("", "empty.xrt");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.path(), Path::new("empty.xrt"));
    assert_eq!(buf.location_of(0), Location::START);
}

#[test]
fn slice_by_span() {
    let buf = SourceBuffer::new("namespace A {}", "a.xrt");
    assert_eq!(buf.slice(Span::new(0, 9)), "namespace");
    assert_eq!(buf.slice(Span::new(10, 11)), "A");
}

#[test]
fn slice_of_multibyte_char() {
    let buf = SourceBuffer::new("\u{e9}x", "a.xrt");
    assert_eq!(buf.slice(Span::new(0, 2)), "\u{e9}");
    assert_eq!(buf.slice(Span::point(3)), "");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "outside the source")]
fn slice_out_of_bounds_panics_in_debug() {
    let buf = SourceBuffer::new("abc", "a.xrt");
    let _ = buf.slice(Span::new(2, 10));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "off a character boundary")]
fn slice_inside_multibyte_char_panics_in_debug() {
    let buf = SourceBuffer::new("\u{e9}x", "a.xrt");
    let _ = buf.slice(Span::new(1, 2));
}

#[test]
fn suffix_from_offset() {
    let buf = SourceBuffer::new("ab`cd", "a.xrt");
    assert_eq!(buf.suffix_from(2), "`cd");
    assert_eq!(buf.suffix_from(99), "");
}

#[test]
fn location_of_second_line() {
    let buf = SourceBuffer::new("a\nbb", "a.xrt");
    assert_eq!(buf.location_of(2), Location::new(2, 1));
    assert_eq!(buf.location_of(3), Location::new(2, 2));
}

#[test]
fn location_counts_chars_not_bytes() {
    let buf = SourceBuffer::new("\u{e9}\u{e9}x", "a.xrt");
    // 'x' starts at byte 4 but is the third character.
    assert_eq!(buf.location_of(4), Location::new(1, 3));
}

#[test]
fn shared_buffer_is_reference_counted() {
    let buf = SourceBuffer::shared("x", "a.xrt");
    let other = Arc::clone(&buf);
    assert_eq!(Arc::strong_count(&buf), 2);
    assert_eq!(other.text(), "x");
}
