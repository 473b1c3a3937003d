use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::ParseError,
    parsing::{
        rope::{Region, Run},
        tags::TagKind,
    },
};

use super::super::{
    classify::{LineClass, LineView},
    engine::{BlockHandler, Context, Detected},
    types::{BlockEvent, Within, raw_region},
};

static UNDERLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:-+|=+)[ \t]*$").unwrap());

/// Setext header: a text line underlined by `=` (level 1) or `-` (level 2).
pub struct Setext;

impl Setext {
    /// Header level implied by an underline, if `s` is one.
    pub fn underline(s: &str) -> Option<u8> {
        if !UNDERLINE.is_match(s) {
            return None;
        }
        Some(if s.starts_with('=') { 1 } else { 2 })
    }

    /// True when `first` followed by `second` reads as a setext header.
    pub fn pairs(first: &LineClass, second: &LineClass) -> bool {
        !first.is_blank && !first.is_rule && second.underline.is_some()
    }
}

pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let [first, second, ..] = *lines else {
        return None;
    };
    if !Setext::pairs(&first.class, &second.class) {
        return None;
    }
    let level = second.class.underline?;
    Some(Detected {
        handler: Box::new(SetextHandler {
            level,
            lines: [first, second],
        }),
        lines: 2,
    })
}

struct SetextHandler<'s> {
    level: u8,
    lines: [LineView<'s>; 2],
}

impl<'s> BlockHandler<'s> for SetextHandler<'s> {
    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        let title = self.lines[0].strip(self.lines[0].class.indent);
        let run = title.content_run();
        let text = Run::new(run.line, run.span.truncate(title.text.trim_end().len()));
        out.push(BlockEvent::tag(
            TagKind::SetextHeader { level: self.level },
            raw_region(&self.lines),
        ));
        out.push(BlockEvent::text(Region::from_run(text)));
        out.push(BlockEvent::end(Default::default()));
        Ok(())
    }
}
