//! Source location spans.
//!
//! A [`Span`] is a compact byte range into a [`SourceBuffer`](crate::SourceBuffer);
//! a [`Location`] is the human-facing 1-based line/column of its start.

use std::fmt;

/// Byte range into the source text.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
///
/// Sources larger than `u32::MAX` bytes are rejected before scanning, so the
/// saturating conversion in [`Span::from_range`] never loses information for
/// accepted input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range, saturating at `u32::MAX`.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column of a position in the source.
///
/// Columns count Unicode scalar values, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// First character of a file.
    pub const START: Location = Location { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let a = Span::new(4, 5);
        let b = Span::new(5, 8);
        assert_eq!(a.merge(b), Span::new(4, 8));
        assert_eq!(b.merge(a), Span::new(4, 8));
    }

    #[test]
    fn test_span_point_is_empty() {
        let p = Span::point(12);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert_eq!(p.to_range(), 12..12);
    }

    #[test]
    fn test_span_from_range_saturates() {
        let s = Span::from_range(3..usize::MAX);
        assert_eq!(s.start, 3);
        assert_eq!(s.end, u32::MAX);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(2, 17).to_string(), "2:17");
        assert_eq!(Location::START.to_string(), "1:1");
    }
}
