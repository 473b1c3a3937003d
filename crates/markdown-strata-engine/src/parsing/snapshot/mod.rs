//! # Snapshot Testing Support
//!
//! Stable renderings of a parsed document and the invariant checker the
//! tests run over every parse.
//!
//! ## Modules
//!
//! - **`normalize`**: the indented `dump` format shared by tests and the
//!   `events` output of the CLI, plus a serializable `Snap` for `insta`
//! - **`invariants`**: runtime checks for stream correctness (stack
//!   discipline, runs inside the source, leaf coverage)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, dump, normalize};
