use std::cmp::Ordering;

use crate::parsing::tags::TagKind;

use super::super::{
    openings::Opening,
    scanner::Scanner,
    types::SpanMatch,
};

/// Emphasis delimiters and the fringe ranks that decide whether a run opens
/// or closes.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub fn is_marker(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// 0 for whitespace, control or the text boundary; 1 for punctuation and
    /// symbols; 2 for everything else.
    pub fn fringe_rank(c: Option<char>) -> u8 {
        match c {
            None => 0,
            Some(c) if c.is_whitespace() || c.is_control() => 0,
            Some(c) if c.is_ascii_punctuation() => 1,
            Some(c) if c.is_alphanumeric() => 2,
            Some(_) => 1,
        }
    }

    /// Levels of the nested pieces a match of `m` characters splits into,
    /// innermost first.
    fn pieces(m: usize) -> impl Iterator<Item = usize> {
        let single = (m % 2 == 1).then_some(1);
        single.into_iter().chain(std::iter::repeat_n(2, m / 2))
    }
}

pub fn scan(sc: &mut Scanner<'_>) -> bool {
    if !sc.cur.peek().is_some_and(Emphasis::is_marker) {
        return false;
    }
    let text = sc.text();
    let start = sc.cur.pos();
    let end = start
        + text.as_bytes()[start..]
            .iter()
            .take_while(|&&b| Emphasis::is_marker(b))
            .count();
    let left = Emphasis::fringe_rank(text[..start].chars().next_back());
    let right = Emphasis::fringe_rank(text[end..].chars().next());
    let direction = left.cmp(&right);

    let mut pos = start;
    while pos < end {
        let ch = text.as_bytes()[pos];
        let len = text.as_bytes()[pos..end]
            .iter()
            .take_while(|&&b| b == ch)
            .count();
        match direction {
            Ordering::Less => sc.openings.push(Opening::Emphasis { ch, pos, len }),
            Ordering::Greater => close(sc, ch, pos, len),
            // Equal fringes leave the run literal.
            Ordering::Equal => {}
        }
        pos += len;
    }
    sc.advance_to(end);
    true
}

/// Matches a closing sub-run against the stack; unmatched characters stay
/// literal.
fn close(sc: &mut Scanner<'_>, ch: u8, mut at: usize, mut remaining: usize) {
    while remaining > 0 {
        let Some(idx) = sc.openings.nearest_emphasis(ch) else {
            return;
        };
        sc.openings.truncate(idx + 1);
        let Some(Opening::Emphasis { pos, len, .. }) = sc.openings.get(idx) else {
            return;
        };
        let m = len.min(remaining);
        let mut open_end = pos + len;
        for level in Emphasis::pieces(m) {
            sc.matches.push(SpanMatch::paired(
                TagKind::Emphasis { level: level as u8 },
                open_end - level,
                at + level,
                level,
                level,
            ));
            open_end -= level;
            at += level;
        }
        sc.openings.shrink(idx, len - m);
        remaining -= m;
    }
}
