use crate::parsing::tags::{Pairing, TagKind};

/// One resolved span, in logical offsets of the leaf text.
///
/// Paired matches own `[start, start + open_len)` as their opening delimiter
/// and `[end - close_len, end)` as their closing one; their children lie in
/// between. Self-closing matches cover the whole range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch {
    pub start: usize,
    pub end: usize,
    pub open_len: usize,
    pub close_len: usize,
    pub kind: TagKind,
}

impl SpanMatch {
    pub fn paired(kind: TagKind, start: usize, end: usize, open_len: usize, close_len: usize) -> Self {
        Self {
            start,
            end,
            open_len,
            close_len,
            kind,
        }
    }

    pub fn single(kind: TagKind, start: usize, end: usize) -> Self {
        Self::paired(kind, start, end, end - start, 0)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_paired(&self) -> bool {
        self.kind.pairing() == Pairing::Opens
    }

    /// End of the children, start of the closing delimiter.
    pub fn inner_end(&self) -> usize {
        self.end - self.close_len
    }
}
