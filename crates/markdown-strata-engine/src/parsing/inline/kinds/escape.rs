use super::super::scanner::Scanner;

/// Backslash escapes: `\` followed by ASCII punctuation stands for the
/// punctuation itself and never starts markup.
pub struct Escape;

impl Escape {
    pub const MARKER: u8 = b'\\';

    pub fn escapes(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}

pub fn scan(sc: &mut Scanner<'_>) -> bool {
    if sc.cur.peek() != Some(Escape::MARKER) || !sc.cur.peek_at(1).is_some_and(Escape::escapes) {
        return false;
    }
    sc.cur.bump_n(2);
    true
}

/// Replaces every escape sequence with the character it stands for.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == Escape::MARKER as char
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
