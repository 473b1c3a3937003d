use crate::parsing::{
    rope::Region,
    tags::{Tag, TagKind},
};

use super::classify::LineView;

/// Output of the block pass.
///
/// Leaf text is left pending so the span engine can resolve it once the
/// reference table is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    Tag(Tag),
    Text(LeafText),
}

/// Accumulated text of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafText {
    pub region: Region,
    /// Code block content: never span-resolved.
    pub literal: bool,
}

impl BlockEvent {
    pub fn tag(kind: TagKind, region: Region) -> Self {
        BlockEvent::Tag(Tag::new(kind, region))
    }

    pub fn end(region: Region) -> Self {
        BlockEvent::Tag(Tag::end(region))
    }

    pub fn text(region: Region) -> Self {
        BlockEvent::Text(LeafText {
            region,
            literal: false,
        })
    }

    pub fn literal(region: Region) -> Self {
        BlockEvent::Text(LeafText {
            region,
            literal: true,
        })
    }
}

/// Which containers enclose the engine currently running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Within {
    pub quote: bool,
    pub list: bool,
}

/// A handler's answer for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// The line belongs to the block.
    Consumed,
    /// Undecided; the next line settles it.
    Paused,
    /// The block is closed; the line is re-detected.
    Rejected,
}

/// The full windows of `lines`, newlines included.
pub fn raw_region(lines: &[LineView<'_>]) -> Region {
    lines.iter().map(|l| l.run).collect()
}

/// The windows of `lines` joined by their newlines, with the final newline
/// dropped.
pub fn joined_region(lines: &[LineView<'_>]) -> Region {
    let mut region = Region::new();
    if let Some((last, rest)) = lines.split_last() {
        for line in rest {
            region.push(line.run);
        }
        region.push(last.content_run());
    }
    region
}
