use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{references::ReferenceTable, tags::TagKind};

use super::{
    super::{openings::Opening, scanner::Scanner, types::SpanMatch},
    escape::unescape,
};

/// `][id]` after the closing bracket, with one optional space.
static REFERENCE_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ ?\[([^\]]*)\]").unwrap());

/// Link and image bracket syntax.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const IMAGE: &'static [u8] = b"![";
}

/// Where a resolved bracket points, and the offset just past its tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: String,
    pub title: Option<String>,
    pub reference_id: Option<String>,
    pub end: usize,
}

impl Target {
    fn from_table(refs: &ReferenceTable, id: &str, end: usize) -> Option<Self> {
        let r = refs.get(id)?;
        Some(Self {
            url: r.url.clone(),
            title: r.title.clone(),
            reference_id: Some(id.to_string()),
            end,
        })
    }
}

/// Pushes a bracket opening at `[` or `![`.
pub fn scan_open(sc: &mut Scanner<'_>) -> bool {
    let pos = sc.cur.pos();
    if sc.cur.starts_with(Link::IMAGE) {
        sc.openings.push(Opening::Bracket { pos, image: true });
        sc.cur.bump_n(Link::IMAGE.len());
        return true;
    }
    if sc.cur.peek() == Some(Link::OPEN) {
        sc.openings.push(Opening::Bracket { pos, image: false });
        sc.cur.bump_n(1);
        return true;
    }
    false
}

/// Resolves `]` against the innermost bracket.
///
/// On failure the bracket is discarded and the `]` is literal.
pub fn scan_close(sc: &mut Scanner<'_>) -> bool {
    if sc.cur.peek() != Some(Link::CLOSE) {
        return false;
    }
    let close = sc.cur.pos();
    let Some(idx) = sc.openings.last_bracket() else {
        sc.cur.bump_n(1);
        return true;
    };
    let Some(Opening::Bracket { pos, image }) = sc.openings.get(idx) else {
        return false;
    };
    let text = sc.text();
    let label_start = pos + if image { Link::IMAGE.len() } else { 1 };
    let label = &text[label_start..close];

    let Some(target) = resolve_tail(text, close + 1, label, sc.refs) else {
        sc.openings.remove(idx);
        sc.cur.bump_n(1);
        return true;
    };

    sc.openings.truncate(idx);
    sc.openings.cancel_brackets();
    let Target {
        url,
        title,
        reference_id,
        end,
    } = target;
    if image {
        sc.matches.retain(|m| m.start < pos);
        sc.matches.push(SpanMatch::single(
            TagKind::Image {
                url,
                title,
                alt_text: unescape(label),
                reference_id,
            },
            pos,
            end,
        ));
    } else {
        sc.matches.push(SpanMatch::paired(
            TagKind::Link {
                url,
                title,
                reference_id,
            },
            pos,
            end,
            1,
            end - close,
        ));
    }
    sc.advance_to(end);
    true
}

/// Tries each tail form in order: `[id]`, `(url "title")`, `[]`, and the
/// shortcut that uses the label itself. `after` is the offset just past `]`.
pub fn resolve_tail(
    text: &str,
    after: usize,
    label: &str,
    refs: &ReferenceTable,
) -> Option<Target> {
    let rest = text.get(after..)?;
    if let Some(caps) = REFERENCE_TAIL.captures(rest) {
        let id = &caps[1];
        if !id.trim().is_empty()
            && let Some(target) = Target::from_table(refs, id, after + caps[0].len())
        {
            return Some(target);
        }
    }
    if let Some((url, title, len)) = inline_tail(rest) {
        return Some(Target {
            url,
            title,
            reference_id: None,
            end: after + len,
        });
    }
    if rest.starts_with("[]")
        && let Some(target) = Target::from_table(refs, label, after + 2)
    {
        return Some(target);
    }
    Target::from_table(refs, label, after)
}

fn skip_blanks(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && matches!(b[i], b' ' | b'\t' | b'\n') {
        i += 1;
    }
    i
}

/// Parses `(url)`, `(url "title")` or `(<url> 'title')` at the start of
/// `rest`. Returns the de-escaped url and title, and the bytes consumed.
fn inline_tail(rest: &str) -> Option<(String, Option<String>, usize)> {
    let b = rest.as_bytes();
    if b.first() != Some(&b'(') {
        return None;
    }
    let mut i = skip_blanks(b, 1);

    let url = if b.get(i) == Some(&b'<') {
        let start = i + 1;
        let len = b[start..]
            .iter()
            .position(|&c| c == b'>' || c == b'<' || c == b'\n')?;
        if b[start + len] != b'>' {
            return None;
        }
        i = start + len + 1;
        &rest[start..start + len]
    } else {
        let start = i;
        let mut depth = 0usize;
        while i < b.len() {
            match b[i] {
                c if c.is_ascii_whitespace() => break,
                b'\\' if i + 1 < b.len() => {
                    i += 2;
                    continue;
                }
                b'(' => depth += 1,
                b')' if depth == 0 => break,
                b')' => depth -= 1,
                _ => {}
            }
            i += 1;
        }
        rest.get(start..i)?
    };

    let before_title = i;
    i = skip_blanks(b, i);
    let mut title = None;
    if i > before_title
        && let Some(&open) = b.get(i)
        && let Some(close) = match open {
            b'"' => Some(b'"'),
            b'\'' => Some(b'\''),
            b'(' => Some(b')'),
            _ => None,
        }
    {
        let start = i + 1;
        let len = b.get(start..)?.iter().position(|&c| c == close)?;
        title = Some(unescape(&rest[start..start + len]));
        i = skip_blanks(b, start + len + 1);
    }

    if b.get(i) != Some(&b')') {
        return None;
    }
    Some((unescape(url), title, i + 1))
}
