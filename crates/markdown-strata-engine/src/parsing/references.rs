//! Link and image reference definitions.
//!
//! Collected from every `ReferenceResolution` block after the block pass and
//! before any span resolution, so definitions may appear anywhere in the
//! document, including after their first use or inside containers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parsing::blocks::BlockEvent;
use crate::parsing::tags::TagKind;

/// Where a reference id points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub url: String,
    pub title: Option<String>,
}

/// Case-insensitive id to definition map; the first definition of an id
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceTable {
    entries: BTreeMap<String, Reference>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-folds an id and collapses internal whitespace runs.
    pub fn fold(id: &str) -> String {
        id.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Records a definition. Returns false, leaving the table untouched, when
    /// the id is already defined.
    pub fn insert(&mut self, id: &str, url: &str, title: Option<&str>) -> bool {
        let key = Self::fold(id);
        if self.entries.contains_key(&key) {
            log::debug!("ignoring duplicate reference definition {key:?}");
            return false;
        }
        self.entries.insert(
            key,
            Reference {
                url: url.to_string(),
                title: title.map(str::to_string),
            },
        );
        true
    }

    pub fn get(&self, id: &str) -> Option<&Reference> {
        self.entries.get(&Self::fold(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in folded-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reference)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds the table from a finished block pass, in document order.
    pub(crate) fn collect(events: &[BlockEvent]) -> Self {
        let mut table = Self::new();
        for event in events {
            if let BlockEvent::Tag(tag) = event
                && let TagKind::ReferenceResolution { id, url, title } = &tag.kind
            {
                table.insert(id, url, title.as_deref());
            }
        }
        table
    }
}
