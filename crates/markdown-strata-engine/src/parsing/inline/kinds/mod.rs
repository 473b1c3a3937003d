//! # Span Kinds
//!
//! Each kind owns its delimiters and the scan step that recognises it. The
//! parser tries them in priority order at every position:
//!
//! 1. **`escape`**: `\` + ASCII punctuation
//! 2. **`link`**: `[`, `![` openings and `]` resolution
//! 3. **`emphasis`**: `*` / `_` runs decided by fringe rank
//! 4. **`code_span`**: backtick runs
//! 5. **`autolink`**: `<...>` forms, then bare URLs and addresses
//!
//! A step that recognises its trigger always consumes at least one byte.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use autolink::AutoLink;
pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use escape::{Escape, unescape};
pub use link::{Link, Target};
