pub mod blocks;
pub mod inline;
pub mod references;
pub mod rope;
pub mod snapshot;
pub mod tags;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

use blocks::{BlockEvent, LeafText};
use references::ReferenceTable;
use rope::{Region, Source};
use tags::{Tag, TagKind, TagStream};

/// How deep the engines go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Blocks, nested containers and resolved spans.
    #[default]
    BlocksAndSpans,
    /// Leaf text is emitted as unresolved Prose.
    BlocksOnly,
    /// Containers carry their region but no children; leaves as in
    /// `BlocksOnly`.
    TopBlocks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Container recursion limit; exceeding it fails the parse.
    pub max_nesting_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// Result of one parse: the source it borrows from, the balanced tag stream,
/// and every reference definition found.
#[derive(Debug)]
pub struct ParsedDoc {
    pub source: Source,
    pub tags: Vec<Tag>,
    pub references: ReferenceTable,
    /// Text region of every non-empty leaf block, in document order.
    pub leaves: Vec<Region>,
}

/// Parses already-normalized text.
pub fn parse_document(text: &str, options: &ParseOptions) -> Result<ParsedDoc, ParseError> {
    parse_source(Source::new(text), options)
}

/// Parses a sequence of lines, each with at most one trailing `\n`.
pub fn parse_lines<I, S>(lines: I, options: &ParseOptions) -> Result<ParsedDoc, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_source(Source::from_lines(lines), options)
}

/// Runs both phases: the block pass and reference collection, then span
/// resolution of every pending leaf.
pub fn parse_source(source: Source, options: &ParseOptions) -> Result<ParsedDoc, ParseError> {
    let events = blocks::parse_blocks(&source, options)?;
    let references = ReferenceTable::collect(&events);
    log::debug!(
        "block pass produced {} events, {} references",
        events.len(),
        references.len()
    );

    let mut stream = TagStream::new();
    let mut leaves = Vec::new();
    for event in events {
        match event {
            BlockEvent::Tag(tag) => stream.push(tag)?,
            BlockEvent::Text(leaf) => {
                stream.splice(leaf_tags(&source, &leaf, &references, options.mode)?)?;
                if !leaf.region.is_empty() {
                    leaves.push(leaf.region);
                }
            }
        }
    }
    let tags = stream.finish()?;
    Ok(ParsedDoc {
        source,
        tags,
        references,
        leaves,
    })
}

fn leaf_tags(
    source: &Source,
    leaf: &LeafText,
    references: &ReferenceTable,
    mode: ParseMode,
) -> Result<Vec<Tag>, ParseError> {
    if leaf.region.is_empty() {
        return Ok(Vec::new());
    }
    if leaf.literal || mode != ParseMode::BlocksAndSpans {
        let text = leaf.region.text(source);
        return Ok(vec![Tag::new(TagKind::Prose { text }, leaf.region.clone())]);
    }
    inline::resolve(source, &leaf.region, references)
}
