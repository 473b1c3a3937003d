//! Block kinds. Each module owns its syntax (markers, constants, line
//! patterns) together with its detector and continuation handler.

pub mod atx;
pub mod block_quote;
pub mod code_block;
pub mod list;
pub mod null;
pub mod paragraph;
pub mod reference;
pub mod rule;
pub mod setext;

pub use atx::Atx;
pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use list::{List, ListKind, Starter};
pub use reference::Definition;
pub use rule::Rule;
pub use setext::Setext;
