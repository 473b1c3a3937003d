//! # Tags
//!
//! The event vocabulary shared by both engines and handed to renderers.
//!
//! A stream is a pre-order walk of the implied block/span tree: opening tags
//! are followed by their children and closed by [`TagKind::End`];
//! self-closing tags stand alone. Which of the two a variant is lives on the
//! variant itself, via [`TagKind::pairing`].

pub mod stream;

use std::fmt;

use serde::Serialize;

use crate::parsing::rope::Region;

pub use stream::TagStream;

/// How a tag participates in Begin/End pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing {
    /// Must be matched by exactly one later `End`.
    Opens,
    /// Stands alone.
    SelfClosing,
    /// The `End` marker itself.
    Closes,
}

/// Every structural or inline event the engines can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum TagKind {
    // Block family
    Null,
    AtxHeader {
        level: u8,
    },
    SetextHeader {
        level: u8,
    },
    Code,
    Quote,
    Item,
    UnorderedList {
        starter: char,
    },
    OrderedList {
        starter: char,
        first_number: u64,
    },
    Paragraph,
    ReferenceResolution {
        id: String,
        url: String,
        title: Option<String>,
    },
    HorizontalRule,

    // Span family
    Prose {
        text: String,
    },
    Emphasis {
        level: u8,
    },
    Link {
        url: String,
        title: Option<String>,
        reference_id: Option<String>,
    },
    Image {
        url: String,
        title: Option<String>,
        alt_text: String,
        reference_id: Option<String>,
    },
    AutomaticLink {
        url: String,
        text: String,
    },
    InlineCode {
        content: String,
    },

    End,
}

impl TagKind {
    pub const fn pairing(&self) -> Pairing {
        match self {
            TagKind::End => Pairing::Closes,
            TagKind::Null
            | TagKind::ReferenceResolution { .. }
            | TagKind::HorizontalRule
            | TagKind::Prose { .. }
            | TagKind::Image { .. }
            | TagKind::AutomaticLink { .. }
            | TagKind::InlineCode { .. } => Pairing::SelfClosing,
            TagKind::AtxHeader { .. }
            | TagKind::SetextHeader { .. }
            | TagKind::Code
            | TagKind::Quote
            | TagKind::Item
            | TagKind::UnorderedList { .. }
            | TagKind::OrderedList { .. }
            | TagKind::Paragraph
            | TagKind::Emphasis { .. }
            | TagKind::Link { .. } => Pairing::Opens,
        }
    }

    /// True for the block family.
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            TagKind::Null
                | TagKind::AtxHeader { .. }
                | TagKind::SetextHeader { .. }
                | TagKind::Code
                | TagKind::Quote
                | TagKind::Item
                | TagKind::UnorderedList { .. }
                | TagKind::OrderedList { .. }
                | TagKind::Paragraph
                | TagKind::ReferenceResolution { .. }
                | TagKind::HorizontalRule
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Null => write!(f, "Null"),
            TagKind::AtxHeader { level } => write!(f, "AtxHeader({level})"),
            TagKind::SetextHeader { level } => write!(f, "SetextHeader({level})"),
            TagKind::Code => write!(f, "Code"),
            TagKind::Quote => write!(f, "Quote"),
            TagKind::Item => write!(f, "Item"),
            TagKind::UnorderedList { starter } => write!(f, "UnorderedList({starter:?})"),
            TagKind::OrderedList {
                starter,
                first_number,
            } => write!(f, "OrderedList({starter:?}, {first_number})"),
            TagKind::Paragraph => write!(f, "Paragraph"),
            TagKind::ReferenceResolution { id, url, title } => {
                write!(f, "ReferenceResolution({id:?} -> {url:?}")?;
                if let Some(t) = title {
                    write!(f, ", {t:?}")?;
                }
                write!(f, ")")
            }
            TagKind::HorizontalRule => write!(f, "HorizontalRule"),
            TagKind::Prose { text } => write!(f, "Prose {text:?}"),
            TagKind::Emphasis { level } => write!(f, "Emphasis({level})"),
            TagKind::Link {
                url,
                title,
                reference_id,
            } => {
                write!(f, "Link({url:?}")?;
                if let Some(t) = title {
                    write!(f, ", title={t:?}")?;
                }
                if let Some(id) = reference_id {
                    write!(f, ", ref={id:?}")?;
                }
                write!(f, ")")
            }
            TagKind::Image {
                url,
                title,
                alt_text,
                reference_id,
            } => {
                write!(f, "Image({url:?}, alt={alt_text:?}")?;
                if let Some(t) = title {
                    write!(f, ", title={t:?}")?;
                }
                if let Some(id) = reference_id {
                    write!(f, ", ref={id:?}")?;
                }
                write!(f, ")")
            }
            TagKind::AutomaticLink { url, text } => write!(f, "AutomaticLink({url:?}, {text:?})"),
            TagKind::InlineCode { content } => write!(f, "InlineCode {content:?}"),
            TagKind::End => write!(f, "End"),
        }
    }
}

/// One emitted event: what it is and the source text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    #[serde(flatten)]
    pub kind: TagKind,
    pub region: Region,
}

impl Tag {
    pub fn new(kind: TagKind, region: Region) -> Self {
        Self { kind, region }
    }

    pub fn end(region: Region) -> Self {
        Self::new(TagKind::End, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_closing_variants() {
        for kind in [
            TagKind::Null,
            TagKind::HorizontalRule,
            TagKind::Prose { text: "x".into() },
            TagKind::InlineCode {
                content: "x".into(),
            },
            TagKind::AutomaticLink {
                url: "u".into(),
                text: "u".into(),
            },
        ] {
            assert_eq!(kind.pairing(), Pairing::SelfClosing, "{kind}");
        }
    }

    #[test]
    fn containers_and_emphasis_open() {
        assert_eq!(TagKind::Quote.pairing(), Pairing::Opens);
        assert_eq!(TagKind::Emphasis { level: 2 }.pairing(), Pairing::Opens);
        assert_eq!(TagKind::End.pairing(), Pairing::Closes);
    }

    #[test]
    fn block_family_membership() {
        assert!(TagKind::Paragraph.is_block());
        assert!(TagKind::HorizontalRule.is_block());
        assert!(!TagKind::Emphasis { level: 1 }.is_block());
        assert!(!TagKind::End.is_block());
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(TagKind::AtxHeader { level: 1 }.to_string(), "AtxHeader(1)");
        assert_eq!(
            TagKind::Prose {
                text: "a\nb".into()
            }
            .to_string(),
            "Prose \"a\\nb\""
        );
        assert_eq!(
            TagKind::Link {
                url: "u".into(),
                title: Some("t".into()),
                reference_id: None
            }
            .to_string(),
            "Link(\"u\", title=\"t\")"
        );
    }
}
