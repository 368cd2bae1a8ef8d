//! # Plain-run block parsing
//!
//! Two-phase parsing of the text between code fences and tables:
//!
//! 1. **Line classification** (`classify`): each line is classified
//!    independently into a [`LineClass`] of local facts.
//! 2. **Block construction** (`builder`): a [`RunBuilder`] folds the
//!    classified lines into [`crate::render::types::ContentBlock`]s,
//!    carrying the open-list accumulator explicitly.
//!
//! Delimiter knowledge lives with the block kinds in `kinds`; neither
//! phase hardcodes syntax characters.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::RunBuilder;
pub use classify::{LineClass, classify};
