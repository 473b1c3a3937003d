/// Failures that abort a parse.
///
/// Malformed markup is never an error: every byte sequence resolves to some
/// valid stream. These variants signal a broken pairing contract, a tripped
/// recursion guard, or a misconfigured detector registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Nesting depth limit of {limit} exceeded at line {line}")]
    NestingTooDeep { limit: usize, line: usize },

    #[error("Unbalanced tag stream: {detail}")]
    Unbalanced { detail: String },

    #[error("Span matches cross at bytes {start}..{end}")]
    CrossedSpans { start: usize, end: usize },

    #[error("No block detector matched line {line}")]
    NoDetector { line: usize },
}

impl ParseError {
    /// True for registry failures that indicate a bug rather than a
    /// structural violation in the produced stream.
    pub fn is_internal(&self) -> bool {
        matches!(self, ParseError::NoDetector { .. })
    }
}
