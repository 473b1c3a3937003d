/// A pending start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    /// `[` or `![`, at `pos`.
    Bracket { pos: usize, image: bool },
    /// The unmatched remainder of an emphasis sub-run: `len` copies of `ch`
    /// starting at `pos`.
    Emphasis { ch: u8, pos: usize, len: usize },
}

/// Stack of pending openings, innermost last.
#[derive(Debug, Default)]
pub struct Openings {
    stack: Vec<Opening>,
}

impl Openings {
    pub fn push(&mut self, opening: Opening) {
        self.stack.push(opening);
    }

    pub fn get(&self, idx: usize) -> Option<Opening> {
        self.stack.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Index of the innermost bracket.
    pub fn last_bracket(&self) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|o| matches!(o, Opening::Bracket { .. }))
    }

    /// Index of the innermost emphasis opening made of `ch`.
    pub fn nearest_emphasis(&self, ch: u8) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|o| matches!(o, Opening::Emphasis { ch: c, .. } if *c == ch))
    }

    /// Discards the opening at `idx` and everything above it.
    pub fn truncate(&mut self, idx: usize) {
        self.stack.truncate(idx);
    }

    pub fn remove(&mut self, idx: usize) {
        if idx < self.stack.len() {
            self.stack.remove(idx);
        }
    }

    /// Shortens the emphasis opening at `idx` to its leftmost `len` chars,
    /// dropping it when nothing is left.
    pub fn shrink(&mut self, idx: usize, len: usize) {
        if len == 0 {
            self.remove(idx);
        } else if let Some(Opening::Emphasis { len: l, .. }) = self.stack.get_mut(idx) {
            *l = len;
        }
    }

    /// Drops every bracket, keeping emphasis openings.
    pub fn cancel_brackets(&mut self) {
        self.stack.retain(|o| !matches!(o, Opening::Bracket { .. }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasis(ch: u8, pos: usize) -> Opening {
        Opening::Emphasis { ch, pos, len: 1 }
    }

    #[test]
    fn nearest_emphasis_skips_other_chars() {
        let mut o = Openings::default();
        o.push(emphasis(b'*', 0));
        o.push(Opening::Bracket { pos: 1, image: false });
        o.push(emphasis(b'_', 2));
        assert_eq!(o.nearest_emphasis(b'*'), Some(0));
        assert_eq!(o.nearest_emphasis(b'_'), Some(2));
        assert_eq!(o.last_bracket(), Some(1));
    }

    #[test]
    fn cancel_brackets_keeps_emphasis() {
        let mut o = Openings::default();
        o.push(Opening::Bracket { pos: 0, image: true });
        o.push(emphasis(b'*', 2));
        o.cancel_brackets();
        assert_eq!(o.len(), 1);
        assert_eq!(o.get(0), Some(emphasis(b'*', 2)));
    }

    #[test]
    fn shrink_to_zero_removes() {
        let mut o = Openings::default();
        o.push(Opening::Emphasis {
            ch: b'*',
            pos: 0,
            len: 3,
        });
        o.shrink(0, 2);
        assert_eq!(
            o.get(0),
            Some(Opening::Emphasis {
                ch: b'*',
                pos: 0,
                len: 2
            })
        );
        o.shrink(0, 0);
        assert!(o.is_empty());
    }
}
