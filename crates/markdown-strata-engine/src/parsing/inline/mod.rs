//! # Span Parsing
//!
//! Resolves inline markup inside the text of one leaf block.
//!
//! ## Architecture
//!
//! One left-to-right scan over the leaf's flattened text keeps a stack of
//! pending openings (brackets and emphasis runs) and records every resolved
//! span as a [`SpanMatch`] in logical offsets. Assembly then sorts the
//! matches, checks that they nest, and maps every offset back to a source
//! [`Region`](crate::parsing::rope::Region), filling the gaps with Prose.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for char-aware scanning
//! - **`openings`**: the `Openings` stack
//! - **`scanner`**: per-scan working state
//! - **`kinds`**: one module per span kind, owning its delimiters
//! - **`parser`**: `resolve()` entry point and stream assembly
//!
//! ## Raw Zones
//!
//! Code spans and automatic links are consumed whole: nothing inside them is
//! scanned again.

pub mod cursor;
pub mod kinds;
pub mod openings;
pub mod parser;
pub mod scanner;
pub mod types;

pub use parser::resolve;
pub use types::SpanMatch;
