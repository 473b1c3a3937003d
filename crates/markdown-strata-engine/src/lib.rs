pub mod error;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ParseError;
pub use io::{IoError, normalize, read_document};
pub use parsing::{
    ParseMode, ParseOptions, ParsedDoc, parse_document, parse_lines, parse_source,
    references::{Reference, ReferenceTable},
    tags::{Pairing, Tag, TagKind},
};
