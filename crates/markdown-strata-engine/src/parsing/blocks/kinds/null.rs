use crate::{error::ParseError, parsing::tags::TagKind};

use super::super::{
    classify::LineView,
    engine::{BlockHandler, Context, Detected},
    types::{BlockEvent, Feed, Within, raw_region},
};

/// A run of blank lines.
pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    first.class.is_blank.then(|| Detected {
        handler: Box::new(NullHandler { lines: vec![first] }),
        lines: 1,
    })
}

struct NullHandler<'s> {
    lines: Vec<LineView<'s>>,
}

impl<'s> BlockHandler<'s> for NullHandler<'s> {
    fn feed(&mut self, line: LineView<'s>, _next: Option<LineView<'s>>) -> Feed {
        if line.class.is_blank {
            self.lines.push(line);
            Feed::Consumed
        } else {
            Feed::Rejected
        }
    }

    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        out.push(BlockEvent::tag(TagKind::Null, raw_region(&self.lines)));
        Ok(())
    }
}
