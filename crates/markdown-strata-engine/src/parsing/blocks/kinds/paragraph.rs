use crate::{
    error::ParseError,
    parsing::{
        rope::{Region, Run},
        tags::TagKind,
    },
};

use super::super::{
    classify::LineView,
    engine::{BlockHandler, Context, Detected},
    types::{BlockEvent, Feed, Within, raw_region},
};
use super::Setext;

/// Paragraphs have no delimiters: they are the default leaf block when no
/// other detector matches, and their text goes to the span engine.
pub fn detect<'s>(lines: &[LineView<'s>], within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    Some(Detected {
        handler: Box::new(ParagraphHandler {
            within,
            lines: vec![first],
        }),
        lines: 1,
    })
}

struct ParagraphHandler<'s> {
    within: Within,
    lines: Vec<LineView<'s>>,
}

impl ParagraphHandler<'_> {
    /// Leading spaces removed from every line, trailing whitespace from the
    /// last, final newline dropped.
    fn text(&self) -> Region {
        let mut region = Region::new();
        if let Some((last, rest)) = self.lines.split_last() {
            for line in rest {
                region.push(line.strip(line.class.indent).run);
            }
            let last = last.strip(last.class.indent);
            let kept = last.text.trim_end().len();
            region.push(Run::new(last.run.line, last.run.span.truncate(kept)));
        }
        region
    }
}

impl<'s> BlockHandler<'s> for ParagraphHandler<'s> {
    fn feed(&mut self, line: LineView<'s>, next: Option<LineView<'s>>) -> Feed {
        let class = &line.class;
        let interrupts = class.is_blank
            || class.is_rule
            || (self.within.quote && class.quote_prefix.is_some())
            || (self.within.list && class.starter.is_some())
            || next.is_some_and(|n| Setext::pairs(class, &n.class));
        if interrupts {
            return Feed::Rejected;
        }
        self.lines.push(line);
        Feed::Consumed
    }

    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        out.push(BlockEvent::tag(TagKind::Paragraph, raw_region(&self.lines)));
        out.push(BlockEvent::text(self.text()));
        out.push(BlockEvent::end(Default::default()));
        Ok(())
    }
}
