use crate::{
    error::ParseError,
    parsing::{ParseMode, tags::TagKind},
};

use super::super::{
    classify::LineView,
    engine::{self, BlockHandler, Context, Detected},
    types::{BlockEvent, Feed, Within, raw_region},
};

/// Blockquote syntax: one `>` marker per nesting level.
///
/// Only the outermost marker is stripped here; deeper markers are seen by the
/// nested engine as a quote of their own.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Most leading spaces allowed before the marker.
    pub const MAX_LEADING: usize = 3;

    /// Bytes covered by leading spaces, the marker, and one optional space
    /// after it. `None` when the line is not quoted.
    pub fn prefix_len(s: &str) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = 0usize;
        while i < b.len() && b[i] == b' ' {
            i += 1;
        }
        if i > Self::MAX_LEADING || b.get(i) != Some(&(Self::PREFIX as u8)) {
            return None;
        }
        i += 1;
        if b.get(i) == Some(&b' ') {
            i += 1;
        }
        Some(i)
    }
}

pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    let n = first.class.quote_prefix?;
    Some(Detected {
        handler: Box::new(QuoteHandler {
            raw: vec![first],
            inner: vec![first.strip(n)],
        }),
        lines: 1,
    })
}

struct QuoteHandler<'s> {
    raw: Vec<LineView<'s>>,
    inner: Vec<LineView<'s>>,
}

impl<'s> BlockHandler<'s> for QuoteHandler<'s> {
    fn feed(&mut self, line: LineView<'s>, _next: Option<LineView<'s>>) -> Feed {
        if line.class.is_blank {
            return Feed::Paused;
        }
        if let Some(n) = line.class.quote_prefix {
            self.raw.push(line);
            self.inner.push(line.strip(n));
            return Feed::Consumed;
        }
        if line.class.is_rule {
            return Feed::Rejected;
        }
        // Lazy continuation.
        self.raw.push(line);
        self.inner.push(line);
        Feed::Consumed
    }

    fn resume(&mut self, paused: LineView<'s>, line: LineView<'s>) -> bool {
        let Some(n) = line.class.quote_prefix else {
            return false;
        };
        self.raw.extend([paused, line]);
        self.inner.extend([paused, line.strip(n)]);
        true
    }

    fn close(
        self: Box<Self>,
        cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        out.push(BlockEvent::tag(TagKind::Quote, raw_region(&self.raw)));
        if cx.options.mode != ParseMode::TopBlocks {
            let within = Within {
                quote: true,
                list: false,
            };
            out.extend(engine::run(cx.nested(within), &self.inner)?);
        }
        out.push(BlockEvent::end(Default::default()));
        Ok(())
    }
}
