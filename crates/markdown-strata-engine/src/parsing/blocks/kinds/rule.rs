use std::sync::LazyLock;

use regex::Regex;

use crate::{error::ParseError, parsing::tags::TagKind};

use super::super::{
    classify::LineView,
    engine::{BlockHandler, Context, Detected},
    types::{BlockEvent, Within, raw_region},
};

static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?:(?:\*[ \t]*){3,}|(?:-[ \t]*){3,}|(?:_[ \t]*){3,})$").unwrap()
});

/// Horizontal rule: three or more of the same `*`, `-` or `_`.
pub struct Rule;

impl Rule {
    pub fn matches(s: &str) -> bool {
        RULE.is_match(s)
    }
}

pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    first.class.is_rule.then(|| Detected {
        handler: Box::new(RuleHandler(first)),
        lines: 1,
    })
}

struct RuleHandler<'s>(LineView<'s>);

impl<'s> BlockHandler<'s> for RuleHandler<'s> {
    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        out.push(BlockEvent::tag(TagKind::HorizontalRule, raw_region(&[self.0])));
        Ok(())
    }
}
