use std::fmt::Write;

use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    rope::preview,
    tags::{Pairing, Tag},
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub tags: Vec<TagSnap>,
    pub references: Vec<ReferenceSnap>,
}

#[derive(Debug, Serialize)]
pub struct TagSnap {
    pub depth: usize,
    pub tag: String,
    /// `(line, start, end)` of every run.
    pub runs: Vec<(usize, usize, usize)>,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReferenceSnap {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
}

/// Walks the stream, yielding each tag with the depth it is printed at.
/// An `End` sits at the depth of the tag it closes.
fn with_depth(tags: &[Tag]) -> impl Iterator<Item = (usize, &Tag)> {
    let mut depth = 0usize;
    tags.iter().map(move |tag| match tag.kind.pairing() {
        Pairing::Opens => {
            depth += 1;
            (depth - 1, tag)
        }
        Pairing::Closes => {
            depth = depth.saturating_sub(1);
            (depth, tag)
        }
        Pairing::SelfClosing => (depth, tag),
    })
}

/// One line per tag, indented two spaces per open ancestor.
pub fn dump(doc: &ParsedDoc) -> String {
    let mut out = String::new();
    for (depth, tag) in with_depth(&doc.tags) {
        let _ = writeln!(out, "{:indent$}{}", "", tag.kind, indent = depth * 2);
    }
    out
}

pub fn normalize(doc: &ParsedDoc) -> Snap {
    let tags = with_depth(&doc.tags)
        .map(|(depth, tag)| TagSnap {
            depth,
            tag: tag.kind.to_string(),
            runs: tag
                .region
                .runs()
                .iter()
                .map(|r| (r.line, r.span.start, r.span.end))
                .collect(),
            text: preview(&doc.source, &tag.region, 60),
        })
        .collect();
    let references = doc
        .references
        .iter()
        .map(|(id, r)| ReferenceSnap {
            id: id.to_string(),
            url: r.url.clone(),
            title: r.title.clone(),
        })
        .collect();
    Snap { tags, references }
}
