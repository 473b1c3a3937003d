use crate::error::ParseError;

use super::{Pairing, Tag};

/// Append-only tag sink that enforces stack discipline as it goes.
///
/// Every opening tag pushes its index; every `End` pops one. Closing with
/// nothing open, or finishing with tags still open, is a structural error.
#[derive(Debug, Default)]
pub struct TagStream {
    tags: Vec<Tag>,
    open: Vec<usize>,
}

impl TagStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) -> Result<(), ParseError> {
        match tag.kind.pairing() {
            Pairing::Opens => self.open.push(self.tags.len()),
            Pairing::Closes => {
                if self.open.pop().is_none() {
                    return Err(ParseError::Unbalanced {
                        detail: format!("End at tag {} with nothing open", self.tags.len()),
                    });
                }
            }
            Pairing::SelfClosing => {}
        }
        self.tags.push(tag);
        Ok(())
    }

    /// Splices a locally produced stream in at the current position.
    pub fn splice(&mut self, tags: impl IntoIterator<Item = Tag>) -> Result<(), ParseError> {
        for tag in tags {
            self.push(tag)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<Tag>, ParseError> {
        if let Some(&idx) = self.open.last() {
            return Err(ParseError::Unbalanced {
                detail: format!("{} left open at end of stream", self.tags[idx].kind),
            });
        }
        Ok(self.tags)
    }
}
