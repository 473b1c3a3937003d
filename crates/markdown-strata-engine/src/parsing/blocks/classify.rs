use crate::parsing::rope::{LineRef, Run, Source};

use super::kinds::{BlockQuote, CodeBlock, List, Rule, Setext, Starter};

/// Local facts about one line, computed without reference to its neighbours.
///
/// Container handlers strip prefixes before forwarding lines to a nested
/// engine, so a line is re-classified every time it is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    /// Whitespace only.
    pub is_blank: bool,
    /// Count of leading spaces.
    pub indent: usize,
    /// Bytes covered by a `>` marker and its optional following space.
    pub quote_prefix: Option<usize>,
    /// A bullet or numeric list starter.
    pub starter: Option<Starter>,
    /// A horizontal rule line.
    pub is_rule: bool,
    /// Setext underline level (`=` is 1, `-` is 2).
    pub underline: Option<u8>,
}

impl LineClass {
    pub fn of(text: &str) -> Self {
        let indent = text.bytes().take_while(|&b| b == b' ').count();
        Self {
            is_blank: text.trim().is_empty(),
            indent,
            quote_prefix: BlockQuote::prefix_len(text),
            starter: List::starter(text),
            is_rule: Rule::matches(text),
            underline: Setext::underline(text),
        }
    }

    /// Indented far enough to be a code line.
    pub fn is_code(&self) -> bool {
        !self.is_blank && self.indent >= CodeBlock::INDENT
    }
}

/// One line as the current engine sees it: a window of a source line with
/// whatever container prefixes its parents removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineView<'s> {
    /// The window, including the trailing newline when present.
    pub run: Run,
    /// The window's text without the trailing newline.
    pub text: &'s str,
    pub class: LineClass,
}

impl<'s> LineView<'s> {
    pub fn new(source: &'s Source, line: LineRef) -> Self {
        let raw = source.slice(line.span);
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        Self {
            run: Run::new(line.index, line.span),
            text,
            class: LineClass::of(text),
        }
    }

    /// Classifies every line of the source.
    pub fn all(source: &'s Source) -> Vec<Self> {
        source.lines().map(|l| Self::new(source, l)).collect()
    }

    /// Drops `n` leading bytes. Callers only strip ASCII prefixes (spaces and
    /// markers), so `n` always lands on a char boundary.
    #[must_use]
    pub fn strip(&self, n: usize) -> Self {
        let n = n.min(self.text.len());
        let text = self.text.get(n..).unwrap_or("");
        Self {
            run: Run::new(self.run.line, self.run.span.skip(n)),
            text,
            class: LineClass::of(text),
        }
    }

    /// The window without its trailing newline.
    pub fn content_run(&self) -> Run {
        Run::new(self.run.line, self.run.span.truncate(self.text.len()))
    }

    /// One-based line number for messages.
    pub fn line_number(&self) -> usize {
        self.run.line + 1
    }
}
