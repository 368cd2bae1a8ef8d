//! Block-specific kinds that own their syntax delimiters.
//!
//! All delimiter constants live here, not scattered in classifier code.
//! The classifier calls these; it never hardcodes `#`, `>`, or a fence.

pub mod block_quote;
pub mod callout;
pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod rule;

pub use block_quote::BlockQuote;
pub use callout::Callout;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_marker::ListMarker;
pub use rule::Rule;
