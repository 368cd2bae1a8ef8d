//! Rendering core for chat transcripts.
//!
//! Converts free-form assistant/user text, complete or still arriving
//! while the model is generating, into an ordered sequence of typed
//! [`ContentBlock`]s with recursively resolved inline markup. The pipeline
//! is pure and synchronous: every call re-renders the full accumulated
//! buffer, so the same input always produces the same output regardless of
//! how the text was chunked on the way in.

pub mod export;
pub mod render;

// Re-export key types for easier usage
pub use render::inline::{InlineNode, resolve};
pub use render::render;
pub use render::types::{CalloutKind, ContentBlock, ListItem, TableData};
