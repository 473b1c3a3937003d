use super::span::Span;

/// A reference to a single source line: its index and byte span.
///
/// The span includes the trailing newline when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef {
    pub index: usize,
    pub span: Span,
}

/// The normalized document the engines borrow from.
///
/// Holds one contiguous buffer plus the span of every line, so Runs can
/// address text by absolute offset while still knowing their line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    text: String,
    lines: Vec<Span>,
}

impl Source {
    /// Builds a source from already-normalized text, splitting after each `\n`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut lines = Vec::new();
        let mut start = 0usize;
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                lines.push(Span::new(start, i + 1));
                start = i + 1;
            }
        }
        if start < text.len() {
            lines.push(Span::new(start, text.len()));
        }
        Self { text, lines }
    }

    /// Builds a source from a sequence of lines, each with at most one
    /// trailing `\n`. A missing newline on any line but the last is supplied
    /// so line boundaries survive concatenation.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut spans: Vec<Span> = Vec::new();
        for line in lines {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
                if let Some(last) = spans.last_mut() {
                    *last = Span::new(last.start, text.len());
                }
            }
            let start = text.len();
            text.push_str(line.as_ref());
            spans.push(Span::new(start, text.len()));
        }
        Self { text, lines: spans }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<LineRef> {
        self.lines.get(index).map(|&span| LineRef { index, span })
    }

    /// Returns an iterator over lines with their byte spans.
    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, &span)| LineRef { index, span })
    }

    /// Slices the buffer. Out-of-range spans yield an empty string.
    pub fn slice(&self, sp: Span) -> &str {
        self.text.get(sp.range()).unwrap_or("")
    }
}
