//! # Inline span resolution
//!
//! Turns one line of chat text into a tree of [`InlineNode`]s. Matchers
//! in `matchers` each propose candidate spans over the raw text; the
//! resolver in `resolver` sorts candidates by start offset, drops any
//! candidate starting inside an already-kept span, and recurses into the
//! inner text of container spans. Code spans and images are terminal.

pub(crate) mod matchers;
mod resolver;
pub mod types;

pub use resolver::resolve;
pub use types::{InlineNode, visible_text};
