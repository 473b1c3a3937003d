use crate::parsing::tags::TagKind;

use super::super::{scanner::Scanner, types::SpanMatch};

/// Code span: a run of N backticks closed by the next run of exactly N.
///
/// Content is literal; nothing else is resolved inside it.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Byte offset of the first closing run of exactly `n` ticks at or after
    /// `from`.
    fn closer(text: &str, from: usize, n: usize) -> Option<usize> {
        let b = text.as_bytes();
        let mut i = from;
        while i < b.len() {
            if b[i] != Self::TICK {
                i += 1;
                continue;
            }
            let run = b[i..].iter().take_while(|&&c| c == Self::TICK).count();
            if run == n {
                return Some(i);
            }
            i += run;
        }
        None
    }
}

pub fn scan(sc: &mut Scanner<'_>) -> bool {
    if sc.cur.peek() != Some(CodeSpan::TICK) {
        return false;
    }
    let start = sc.cur.pos();
    let n = sc.cur.run_len(CodeSpan::TICK);
    let open_end = start + n;
    let text = sc.text();
    match CodeSpan::closer(text, open_end, n) {
        Some(close) => {
            let content = text[open_end..close].to_string();
            let end = close + n;
            sc.matches
                .push(SpanMatch::single(TagKind::InlineCode { content }, start, end));
            sc.advance_to(end);
        }
        // Without a closer the opening ticks are literal.
        None => sc.advance_to(open_end),
    }
    true
}
