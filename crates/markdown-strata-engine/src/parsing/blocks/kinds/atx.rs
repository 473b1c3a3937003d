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
    types::{BlockEvent, Within, raw_region},
};

/// ATX header: a single line opened by `#` marks.
pub struct Atx;

impl Atx {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    fn is_trim(c: char) -> bool {
        c == Self::MARKER || c.is_whitespace()
    }

    /// Level and the byte range of the header text within `s`.
    ///
    /// A line of only marks and whitespace has no text; its level comes from
    /// its trimmed length instead.
    pub fn parse(s: &str) -> Option<(u8, Option<(usize, usize)>)> {
        if !s.starts_with(Self::MARKER) {
            return None;
        }
        let start = s.len() - s.trim_start_matches(Self::is_trim).len();
        let end = s.trim_end_matches(Self::is_trim).len();
        if start < end {
            let hashes = s.chars().take_while(|&c| c == Self::MARKER).count();
            Some((Self::level(hashes), Some((start, end))))
        } else {
            Some((Self::level(s.trim().len()), None))
        }
    }

    fn level(n: usize) -> u8 {
        n.min(Self::MAX_LEVEL) as u8
    }
}

pub fn detect<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    let (level, text) = Atx::parse(first.text)?;
    Some(Detected {
        handler: Box::new(AtxHandler {
            line: first,
            level,
            text,
        }),
        lines: 1,
    })
}

struct AtxHandler<'s> {
    line: LineView<'s>,
    level: u8,
    text: Option<(usize, usize)>,
}

impl<'s> BlockHandler<'s> for AtxHandler<'s> {
    fn close(
        self: Box<Self>,
        _cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        out.push(BlockEvent::tag(
            TagKind::AtxHeader { level: self.level },
            raw_region(&[self.line]),
        ));
        if let Some((start, end)) = self.text {
            let run = self.line.run;
            let span = run.span.skip(start).truncate(end - start);
            out.push(BlockEvent::text(Region::from_run(Run::new(run.line, span))));
        }
        out.push(BlockEvent::end(Default::default()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("# Hello", 1, Some("Hello"))]
    #[case("### Three ###", 3, Some("Three"))]
    #[case("######## deep", 6, Some("deep"))]
    #[case("#tight", 1, Some("tight"))]
    #[case("###", 3, None)]
    #[case("## #  ", 4, None)]
    #[case("#########", 6, None)]
    fn levels_and_text(#[case] line: &str, #[case] level: u8, #[case] text: Option<&str>) {
        let (got, range) = Atx::parse(line).unwrap();
        assert_eq!(got, level);
        assert_eq!(range.map(|(s, e)| &line[s..e]), text);
    }

    #[test]
    fn needs_leading_marker() {
        assert!(Atx::parse(" # no").is_none());
        assert!(Atx::parse("text").is_none());
    }
}
