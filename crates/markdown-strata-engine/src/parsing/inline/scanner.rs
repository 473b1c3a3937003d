use crate::parsing::references::ReferenceTable;

use super::{cursor::Cursor, openings::Openings, types::SpanMatch};

/// Working state of one span scan over a leaf's text.
pub struct Scanner<'a> {
    pub cur: Cursor<'a>,
    pub refs: &'a ReferenceTable,
    pub openings: Openings,
    pub matches: Vec<SpanMatch>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, refs: &'a ReferenceTable) -> Self {
        Self {
            cur: Cursor::new(text),
            refs,
            openings: Openings::default(),
            matches: Vec::new(),
        }
    }

    /// The whole text being scanned.
    pub fn text(&self) -> &'a str {
        self.cur.s
    }

    /// Moves the cursor forward to `pos`.
    pub fn advance_to(&mut self, pos: usize) {
        let here = self.cur.pos();
        self.cur.bump_n(pos.saturating_sub(here));
    }
}
