//! Line-annotated views over the source buffer.
//!
//! A [`Run`] is one contiguous window of a single line. A [`Region`] strings
//! Runs together so that text assembled from several prefix-stripped lines
//! (a quoted paragraph, a list item) reads as one logical buffer without ever
//! copying bytes out of the source.

use serde::Serialize;

use super::{lines::Source, span::Span};

/// One line-tagged contiguous byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Run {
    /// Zero-based index of the source line this run lies on.
    pub line: usize,
    /// Absolute byte range into the source buffer.
    pub span: Span,
}

impl Run {
    pub fn new(line: usize, span: Span) -> Self {
        Self { line, span }
    }

    pub fn len(self) -> usize {
        self.span.len()
    }

    pub fn is_empty(self) -> bool {
        self.span.is_empty()
    }
}

/// An ordered sequence of Runs read as one logical byte string.
///
/// # Invariants
///
/// - No Run is empty.
/// - Adjacent Runs on the same line that touch are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Region {
    runs: Vec<Run>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_run(run: Run) -> Self {
        let mut region = Self::new();
        region.push(run);
        region
    }

    /// Appends a run, dropping it if empty and merging it into the last run
    /// when they are contiguous on the same line.
    pub fn push(&mut self, run: Run) {
        if run.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut()
            && last.line == run.line
            && last.span.end == run.span.start
        {
            last.span.end = run.span.end;
            return;
        }
        self.runs.push(run);
    }

    /// Concatenates `other` onto the end of this region.
    pub fn append(&mut self, other: &Region) {
        for run in &other.runs {
            self.push(*run);
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Absolute offset of the first byte, if any.
    pub fn start(&self) -> Option<usize> {
        self.runs.first().map(|r| r.span.start)
    }

    /// Absolute offset one past the last byte, if any.
    pub fn end(&self) -> Option<usize> {
        self.runs.last().map(|r| r.span.end)
    }

    /// Drops the first `n` logical bytes.
    #[must_use]
    pub fn skip(&self, mut n: usize) -> Region {
        let mut out = Region::new();
        for run in &self.runs {
            if n >= run.len() {
                n -= run.len();
                continue;
            }
            out.push(Run::new(run.line, run.span.skip(n)));
            n = 0;
        }
        out
    }

    /// Keeps at most the first `n` logical bytes.
    #[must_use]
    pub fn truncate(&self, mut n: usize) -> Region {
        let mut out = Region::new();
        for run in &self.runs {
            if n == 0 {
                break;
            }
            let kept = run.span.truncate(n);
            n -= kept.len();
            out.push(Run::new(run.line, kept));
        }
        out
    }

    /// The logical byte range `[start, end)` as its own region.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Region {
        self.skip(start).truncate(end.saturating_sub(start))
    }

    /// Iterates the text of each run in order.
    pub fn chunks<'s>(&'s self, source: &'s Source) -> impl Iterator<Item = &'s str> + 's {
        self.runs.iter().map(move |r| source.slice(r.span))
    }

    /// Copies the logical content out of the source.
    pub fn text(&self, source: &Source) -> String {
        self.chunks(source).collect()
    }

    /// Byte equality of logical content, independent of how either side is
    /// split into runs.
    pub fn same_content(&self, other: &Region, source: &Source) -> bool {
        self.len() == other.len()
            && self
                .chunks(source)
                .flat_map(str::bytes)
                .eq(other.chunks(source).flat_map(str::bytes))
    }
}

impl FromIterator<Run> for Region {
    fn from_iter<T: IntoIterator<Item = Run>>(iter: T) -> Self {
        let mut region = Region::new();
        for run in iter {
            region.push(run);
        }
        region
    }
}
