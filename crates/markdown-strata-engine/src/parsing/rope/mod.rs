pub mod lines;
pub mod region;
pub mod slice;
pub mod span;

pub use lines::{LineRef, Source};
pub use region::{Region, Run};
pub use slice::preview;
pub use span::Span;
