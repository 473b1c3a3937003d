use crate::{
    error::ParseError,
    parsing::{
        references::ReferenceTable,
        rope::{Region, Source},
        tags::{Tag, TagKind},
    },
};

use super::{
    kinds::{autolink, code_span, emphasis, escape, link, unescape},
    scanner::Scanner,
    types::SpanMatch,
};

/// Resolves the inline markup of one leaf region into span tags.
///
/// The returned stream is locally balanced: every Emphasis and Link is
/// closed, and Prose fills every gap between matches.
pub fn resolve(
    source: &Source,
    region: &Region,
    refs: &ReferenceTable,
) -> Result<Vec<Tag>, ParseError> {
    let text = region.text(source);
    let matches = scan(&text, refs);
    log::trace!("{} span matches in {} bytes", matches.len(), text.len());
    assemble(&text, region, matches)
}

/// One scan over `text`, trying each span kind in priority order at every
/// position.
pub fn scan(text: &str, refs: &ReferenceTable) -> Vec<SpanMatch> {
    let mut sc = Scanner::new(text, refs);
    while !sc.cur.eof() {
        let consumed = escape::scan(&mut sc)
            || link::scan_open(&mut sc)
            || link::scan_close(&mut sc)
            || emphasis::scan(&mut sc)
            || code_span::scan(&mut sc)
            || autolink::scan_angle(&mut sc)
            || autolink::scan_bare(&mut sc);
        if !consumed {
            sc.cur.bump();
        }
    }
    sc.matches
}

fn push_prose(out: &mut Vec<Tag>, text: &str, region: &Region, start: usize, end: usize) {
    if start < end {
        out.push(Tag::new(
            TagKind::Prose {
                text: unescape(&text[start..end]),
            },
            region.slice(start, end),
        ));
    }
}

/// Orders the matches into a tag stream, mapping logical offsets back to
/// source regions.
///
/// Matches are stably sorted by start, longer first on ties, so an enclosing
/// match always precedes what it contains.
pub fn assemble(
    text: &str,
    region: &Region,
    mut matches: Vec<SpanMatch>,
) -> Result<Vec<Tag>, ParseError> {
    matches.sort_by(|a, b| a.start.cmp(&b.start).then(b.len().cmp(&a.len())));

    let mut out = Vec::with_capacity(matches.len() * 3 + 1);
    // (end, inner_end) of each open paired match.
    let mut open: Vec<(usize, usize)> = Vec::new();
    let mut cursor = 0usize;

    for m in matches {
        while let Some(&(end, inner_end)) = open.last()
            && end <= m.start
        {
            push_prose(&mut out, text, region, cursor, inner_end);
            out.push(Tag::end(region.slice(inner_end, end)));
            cursor = end;
            open.pop();
        }
        let crosses = m.start < cursor
            || open
                .last()
                .is_some_and(|&(_, inner_end)| m.end > inner_end);
        if crosses {
            return Err(ParseError::CrossedSpans {
                start: m.start,
                end: m.end,
            });
        }
        push_prose(&mut out, text, region, cursor, m.start);
        let paired = m.is_paired();
        let inner_end = m.inner_end();
        let SpanMatch {
            start,
            end,
            open_len,
            kind,
            ..
        } = m;
        if paired {
            out.push(Tag::new(kind, region.slice(start, start + open_len)));
            open.push((end, inner_end));
            cursor = start + open_len;
        } else {
            out.push(Tag::new(kind, region.slice(start, end)));
            cursor = end;
        }
    }
    while let Some((end, inner_end)) = open.pop() {
        push_prose(&mut out, text, region, cursor, inner_end);
        out.push(Tag::end(region.slice(inner_end, end)));
        cursor = end;
    }
    push_prose(&mut out, text, region, cursor, text.len());
    Ok(out)
}
