use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::ParseError,
    parsing::{ParseMode, tags::TagKind},
};

use super::super::{
    classify::LineView,
    engine::{self, BlockHandler, Context, Detected},
    types::{BlockEvent, Feed, Within, raw_region},
};

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^( {0,3})([*+-])[ \t]+").unwrap());
static ORDERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^( {0,3})(\d+)\.[ \t]+").unwrap());

/// Which family a list starter belongs to. Bullets only continue a list
/// opened with the same bullet character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet(char),
    Ordered,
}

/// A list item marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Starter {
    pub kind: ListKind,
    /// Leading spaces before the marker.
    pub indent: usize,
    /// Bytes from line start to the item text: indent, marker and spacing.
    pub width: usize,
    /// Item number for ordered starters, zero for bullets.
    pub number: u64,
}

/// List starter syntax.
pub struct List;

impl List {
    /// Separator after the digits of an ordered starter.
    pub const ORDERED_DELIMITER: char = '.';

    pub fn starter(s: &str) -> Option<Starter> {
        if let Some(caps) = BULLET.captures(s) {
            let bullet = caps[2].chars().next()?;
            return Some(Starter {
                kind: ListKind::Bullet(bullet),
                indent: caps[1].len(),
                width: caps[0].len(),
                number: 0,
            });
        }
        let caps = ORDERED.captures(s)?;
        Some(Starter {
            kind: ListKind::Ordered,
            indent: caps[1].len(),
            width: caps[0].len(),
            number: caps[2].parse().unwrap_or(u64::MAX),
        })
    }
}

pub fn detect_unordered<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    detect(lines, |k| matches!(k, ListKind::Bullet(_)))
}

pub fn detect_ordered<'s>(lines: &[LineView<'s>], _within: Within) -> Option<Detected<'s>> {
    detect(lines, |k| k == ListKind::Ordered)
}

fn detect<'s>(lines: &[LineView<'s>], wanted: fn(ListKind) -> bool) -> Option<Detected<'s>> {
    let first = *lines.first()?;
    let starter = first.class.starter.filter(|s| wanted(s.kind))?;
    let mut handler = ListHandler {
        kind: starter.kind,
        width: starter.width,
        first_number: starter.number,
        items: Vec::new(),
    };
    handler.open_item(first, starter);
    Some(Detected {
        handler: Box::new(handler),
        lines: 1,
    })
}

#[derive(Default)]
struct Item<'s> {
    raw: Vec<LineView<'s>>,
    inner: Vec<LineView<'s>>,
}

struct ListHandler<'s> {
    kind: ListKind,
    /// Running starter width, fixed by the first item.
    width: usize,
    first_number: u64,
    items: Vec<Item<'s>>,
}

impl<'s> ListHandler<'s> {
    fn open_item(&mut self, line: LineView<'s>, starter: Starter) {
        self.items.push(Item {
            raw: vec![line],
            inner: vec![line.strip(starter.width)],
        });
    }

    /// Adds a line to the current item with up to the running width of
    /// indentation removed.
    fn continue_item(&mut self, line: LineView<'s>) {
        let inner = line.strip(line.class.indent.min(self.width));
        if let Some(item) = self.items.last_mut() {
            item.raw.push(line);
            item.inner.push(inner);
        }
    }

    /// A starter shallow enough to sit at item level.
    fn item_starter(&self, line: &LineView<'_>) -> Option<Starter> {
        line.class.starter.filter(|s| s.indent < self.width)
    }

    fn closes(&self, line: &LineView<'_>) -> bool {
        line.class.is_rule && line.class.indent < self.width
    }

    fn tag(&self) -> TagKind {
        match self.kind {
            ListKind::Bullet(starter) => TagKind::UnorderedList { starter },
            ListKind::Ordered => TagKind::OrderedList {
                starter: List::ORDERED_DELIMITER,
                first_number: self.first_number,
            },
        }
    }
}

impl<'s> BlockHandler<'s> for ListHandler<'s> {
    fn feed(&mut self, line: LineView<'s>, _next: Option<LineView<'s>>) -> Feed {
        if line.class.is_blank {
            return Feed::Paused;
        }
        if self.closes(&line) {
            return Feed::Rejected;
        }
        if let Some(starter) = self.item_starter(&line) {
            if starter.kind != self.kind {
                return Feed::Rejected;
            }
            self.open_item(line, starter);
            return Feed::Consumed;
        }
        self.continue_item(line);
        Feed::Consumed
    }

    fn resume(&mut self, paused: LineView<'s>, line: LineView<'s>) -> bool {
        if line.class.is_blank || self.closes(&line) {
            return false;
        }
        if let Some(starter) = self.item_starter(&line) {
            if starter.kind != self.kind {
                return false;
            }
            self.continue_item(paused);
            self.open_item(line, starter);
            return true;
        }
        if line.class.indent < self.width {
            return false;
        }
        self.continue_item(paused);
        self.continue_item(line);
        true
    }

    fn close(
        self: Box<Self>,
        cx: Context<'s>,
        out: &mut Vec<BlockEvent>,
    ) -> Result<(), ParseError> {
        let raw: Vec<_> = self.items.iter().flat_map(|i| i.raw.iter().copied()).collect();
        out.push(BlockEvent::tag(self.tag(), raw_region(&raw)));
        let within = Within {
            quote: false,
            list: true,
        };
        for item in &self.items {
            out.push(BlockEvent::tag(TagKind::Item, raw_region(&item.raw)));
            if cx.options.mode != ParseMode::TopBlocks {
                out.extend(engine::run(cx.nested(within), &item.inner)?);
            }
            out.push(BlockEvent::end(Default::default()));
        }
        out.push(BlockEvent::end(Default::default()));
        Ok(())
    }
}
