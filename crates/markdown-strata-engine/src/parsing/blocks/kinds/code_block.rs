use crate::{error::ParseError, parsing::tags::TagKind};

use super::super::{
    classify::LineView,
    engine::{BlockHandler, Context, Detected},
    types::{BlockEvent, Feed, Within, joined_region, raw_region},
};

/// Indented code block: every line carries at least four spaces.
pub struct CodeBlock;

impl CodeBlock {
    /// Leading spaces that make a line code.
    pub const INDENT: usize = 4;

    /// Content of one line with its code indent removed.
    fn content<'s>(line: LineView<'s>) -> LineView<'s> {
        line.strip(line.class.indent.min(Self::INDENT))
    }
}

pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    first.class.is_code().then(|| Detected {
        handler: Box::new(CodeHandler { lines: vec![first] }),
        lines: 1,
    })
}

struct CodeHandler<'s> {
    lines: Vec<LineView<'s>>,
}

impl<'s> BlockHandler<'s> for CodeHandler<'s> {
    fn feed(&mut self, line: LineView<'s>, _next: Option<LineView<'s>>) -> Feed {
        if line.class.is_code() {
            self.lines.push(line);
            Feed::Consumed
        } else if line.class.is_blank {
            Feed::Paused
        } else {
            Feed::Rejected
        }
    }

    fn resume(&mut self, paused: LineView<'s>, line: LineView<'s>) -> bool {
        if !line.class.is_code() {
            return false;
        }
        self.lines.extend([paused, line]);
        true
    }

    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        let content: Vec<_> = self.lines.iter().copied().map(CodeBlock::content).collect();
        out.push(BlockEvent::tag(TagKind::Code, raw_region(&self.lines)));
        out.push(BlockEvent::literal(joined_region(&content)));
        out.push(BlockEvent::end(Default::default()));
        Ok(())
    }
}
