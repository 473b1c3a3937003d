use serde::Serialize;

/// A byte range `[start, end)` into the source buffer.
///
/// Every Run, Region and Tag stores spans rather than copied text, so slicing
/// the source with any span reproduces the exact bytes it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Drops `n` bytes from the front, clamped to the span.
    #[must_use]
    pub fn skip(self, n: usize) -> Self {
        Self {
            start: (self.start + n).min(self.end),
            end: self.end,
        }
    }

    /// Keeps at most `n` bytes from the front.
    #[must_use]
    pub fn truncate(self, n: usize) -> Self {
        Self {
            start: self.start,
            end: self.end.min(self.start + n),
        }
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_clamps_to_end() {
        let sp = Span::new(4, 8);
        assert_eq!(sp.skip(2), Span::new(6, 8));
        assert_eq!(sp.skip(10), Span::new(8, 8));
        assert!(sp.skip(10).is_empty());
    }

    #[test]
    fn truncate_keeps_prefix() {
        let sp = Span::new(4, 8);
        assert_eq!(sp.truncate(1), Span::new(4, 5));
        assert_eq!(sp.truncate(100), sp);
    }

    #[test]
    fn inverted_span_has_zero_len() {
        let sp = Span { start: 5, end: 3 };
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }
}
